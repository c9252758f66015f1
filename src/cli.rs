// imagine/src/cli.rs
use crate::core::{ProcessSettings, ResizeAlgorithm};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// Imagine provides tools to inspect, list and resize images.
///
/// Commands can be chained in one invocation, e.g.
/// `imagine set-working-dir pics image-info pics/ball.png --s`.
#[derive(Parser, Debug)]
#[command(name = "imagine", version, arg_required_else_help = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Set the working directory to look for images in
    SetWorkingDir {
        /// Directory holding at least one supported image
        #[arg(value_parser = existing_dir)]
        working_directory: PathBuf,
    },

    /// Show the format, size and mode of an image
    ImageInfo {
        /// Image file to inspect
        #[arg(value_parser = existing_file)]
        image: PathBuf,

        /// Display the size of the image
        #[arg(long = "s")]
        size: bool,

        /// Display the mode of the image
        #[arg(long = "m")]
        mode: bool,

        /// Display the format of the image
        #[arg(long = "f")]
        format: bool,
    },

    /// Interactively resize a single image
    ///
    /// The result is saved next to the source unless --save-to is given.
    ProcessImage {
        /// Image file to process
        #[arg(value_parser = existing_file)]
        image: PathBuf,

        /// Directory to save the processed image to
        #[arg(short = 's', long)]
        save_to: Option<PathBuf>,

        /// Resampling filter
        #[arg(long, value_enum, default_value_t = Algorithm::Lanczos3)]
        algorithm: Algorithm,

        /// JPEG quality (1-100)
        #[arg(long, default_value_t = 85, value_parser = clap::value_parser!(u8).range(1..=100))]
        quality: u8,
    },

    /// Show the files in a directory
    ShowImages {
        /// Directory to list
        #[arg(value_parser = existing_dir)]
        directory: PathBuf,

        /// Recursively show images in subdirectories
        #[arg(long = "r")]
        recursive: bool,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::SetWorkingDir { .. } => "set-working-dir",
            Commands::ImageInfo { .. } => "image-info",
            Commands::ProcessImage { .. } => "process-image",
            Commands::ShowImages { .. } => "show-images",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

impl ProcessSettings {
    pub fn from_args(algorithm: Algorithm, quality: u8) -> Self {
        Self {
            algorithm: algorithm.into(),
            quality,
        }
    }
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_file() {
        Ok(path)
    } else if path.exists() {
        Err(format!("'{}' is not a file.", value))
    } else {
        Err(format!("Path '{}' does not exist.", value))
    }
}

fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else if path.exists() {
        Err(format!("'{}' is not a directory.", value))
    } else {
        Err(format!("Directory '{}' does not exist.", value))
    }
}

/// Splits argv into one argv per chained command. Options that come before
/// the first command name (e.g. `--verbose`) are repeated in every part. A
/// value that happens to equal a command name starts a new command.
pub fn split_chain<I, T>(args: I) -> Vec<Vec<OsString>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let names: Vec<&str> = command.get_subcommands().map(|c| c.get_name()).collect();

    let mut args = args.into_iter().map(Into::into);
    let mut prefix = vec![args.next().unwrap_or_else(|| OsString::from("imagine"))];
    let mut segments: Vec<Vec<OsString>> = Vec::new();

    for arg in args {
        let starts_command = arg.to_str().map(|a| names.contains(&a)).unwrap_or(false);
        if starts_command {
            segments.push(vec![arg]);
        } else if let Some(segment) = segments.last_mut() {
            segment.push(arg);
        } else {
            prefix.push(arg);
        }
    }

    if segments.is_empty() {
        return vec![prefix];
    }

    segments
        .into_iter()
        .map(|segment| prefix.iter().cloned().chain(segment).collect())
        .collect()
}

/// Parses every chained command on its own so one bad command does not
/// prevent the others from running.
pub fn parse_chain<I, T>(args: I) -> Vec<Result<Cli, clap::Error>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    split_chain(args)
        .into_iter()
        .map(Cli::try_parse_from)
        .collect()
}
