use anyhow::Context;
use clap::error::ErrorKind;
use imagine::{parse_chain, Dispatcher, Status};
use log::LevelFilter;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let mut invocations = Vec::new();
    for parsed in parse_chain(std::env::args_os()) {
        match parsed {
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp
                        | ErrorKind::DisplayVersion
                        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) =>
            {
                e.exit()
            }
            other => invocations.push(other),
        }
    }

    let verbose = invocations
        .iter()
        .any(|invocation| matches!(invocation, Ok(cli) if cli.verbose));

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut dispatcher = Dispatcher::new(io::stdout(), io::stdin().lock());
    let mut usage_errors = 0;

    for invocation in invocations {
        match invocation {
            Ok(cli) => {
                dispatcher.dispatch(cli.command);
            }
            Err(e) => {
                usage_errors += 1;
                let message = e.render().to_string();
                dispatcher
                    .report(Status::Failed, message.trim_end())
                    .context("failed to write to stdout")?;
            }
        }
    }

    if usage_errors > 0 {
        log::debug!("{} command(s) were not run", usage_errors);
        return Ok(ExitCode::from(2));
    }

    Ok(ExitCode::SUCCESS)
}
