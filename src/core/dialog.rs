// imagine/src/core/dialog.rs
//! Interactive prompts for `process-image`.
//!
//! Gathering input is kept apart from acting on it: [`ResizeDialog`] walks
//! `AwaitChoice -> AwaitDimensions -> AwaitFilenameDecision -> Execute` and
//! hands back a [`ResizeRequest`], reading answers from any [`InputSource`].
//! Tests drive it with a byte slice instead of a terminal.

use super::{ImagineError, ResizeRequest, Result};
use crate::utils::destination_file_name;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Line-oriented source of answers.
pub trait InputSource {
    /// Next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> InputSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Typed prompts on top of an input source and an output writer.
pub struct Prompter<'a, I: ?Sized, W: ?Sized> {
    input: &'a mut I,
    out: &'a mut W,
}

impl<'a, I: InputSource + ?Sized, W: Write + ?Sized> Prompter<'a, I, W> {
    pub fn new(input: &'a mut I, out: &'a mut W) -> Self {
        Self { input, out }
    }

    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        match self.input.next_line()? {
            Some(line) => Ok(line),
            None => {
                writeln!(self.out)?;
                Err(ImagineError::Validation(
                    "Input ended before a value was entered".to_string(),
                ))
            }
        }
    }

    /// Re-asks until the answer parses as an integer.
    pub fn integer(&mut self, label: &str) -> Result<i64> {
        loop {
            let answer = self.ask(label)?;
            match answer.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.out, "Error: '{}' is not a valid integer.", answer.trim())?,
            }
        }
    }

    /// Yes/no question; an empty answer takes `default`.
    pub fn confirm(&mut self, label: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let answer = self.ask(&format!("{} {}: ", label, hint))?;
            match answer.trim().to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.out, "Error: invalid input")?,
            }
        }
    }

    /// Re-asks until the answer is non-blank.
    pub fn text(&mut self, label: &str) -> Result<String> {
        loop {
            let answer = self.ask(&format!("{}: ", label))?;
            if !answer.trim().is_empty() {
                return Ok(answer.trim().to_string());
            }
        }
    }

    pub fn out(&mut self) -> &mut W {
        self.out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Resize,
    ConvertFormat,
}

impl MenuChoice {
    pub const MENU: &'static str = "1.Resize Image\n2.Convert to other image formats";

    pub fn from_number(value: i64) -> Result<Self> {
        match value {
            1 => Ok(MenuChoice::Resize),
            2 => Ok(MenuChoice::ConvertFormat),
            _ => Err(ImagineError::Validation("Enter a valid option".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    AwaitChoice,
    AwaitDimensions,
    AwaitFilenameDecision { width: u32, height: u32 },
    Execute(ResizeRequest),
}

pub struct ResizeDialog {
    source: PathBuf,
    save_dir: PathBuf,
    state: DialogState,
}

impl ResizeDialog {
    pub fn new(source: &Path, save_dir: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            save_dir: save_dir.to_path_buf(),
            state: DialogState::AwaitChoice,
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    /// Asks the question for the current state and moves to the next one.
    pub fn step<I, W>(&mut self, prompt: &mut Prompter<'_, I, W>) -> Result<()>
    where
        I: InputSource + ?Sized,
        W: Write + ?Sized,
    {
        self.state = match &self.state {
            DialogState::AwaitChoice => match MenuChoice::from_number(prompt.integer(">> ")?)? {
                MenuChoice::Resize => DialogState::AwaitDimensions,
                MenuChoice::ConvertFormat => {
                    return Err(ImagineError::Unsupported(
                        "converting to other image formats".to_string(),
                    ))
                }
            },
            DialogState::AwaitDimensions => {
                let width = positive_dimension("Width", prompt.integer("Width >> ")?)?;
                let height = positive_dimension("Height", prompt.integer("Height >> ")?)?;
                DialogState::AwaitFilenameDecision { width, height }
            }
            DialogState::AwaitFilenameDecision { width, height } => {
                let file_name = if prompt.confirm("Use Default file name? >>", true)? {
                    destination_file_name(&self.source, None)?
                } else {
                    let base = prompt.text("Enter new file name")?;
                    let name = destination_file_name(&self.source, Some(&base))?;
                    writeln!(prompt.out(), "new file name is: {}", name.to_string_lossy())?;
                    name
                };

                DialogState::Execute(ResizeRequest {
                    source: self.source.clone(),
                    width: *width,
                    height: *height,
                    file_name,
                    save_dir: self.save_dir.clone(),
                })
            }
            DialogState::Execute(_) => return Ok(()),
        };

        Ok(())
    }

    /// Runs the dialog to completion.
    pub fn run<I, W>(mut self, input: &mut I, out: &mut W) -> Result<ResizeRequest>
    where
        I: InputSource + ?Sized,
        W: Write + ?Sized,
    {
        let mut prompt = Prompter::new(input, out);
        loop {
            if let DialogState::Execute(request) = &self.state {
                return Ok(request.clone());
            }
            self.step(&mut prompt)?;
        }
    }
}

fn positive_dimension(label: &str, value: i64) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| ImagineError::Validation(format!("{} must be a positive integer", label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn run(script: &str) -> (Result<ResizeRequest>, String) {
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        let result = ResizeDialog::new(Path::new("pics/ball.png"), Path::new("pics"))
            .run(&mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_resize_with_default_name() {
        let (result, _) = run("1\n200\n150\n\n");
        let request = result.unwrap();

        assert_eq!((request.width, request.height), (200, 150));
        assert_eq!(request.file_name, OsString::from("ball.png"));
        assert_eq!(request.destination(), PathBuf::from("pics/ball.png"));
    }

    #[test]
    fn test_resize_with_custom_name() {
        let (result, output) = run("1\n64\n64\nn\nthumb\n");
        let request = result.unwrap();

        assert_eq!(request.destination(), PathBuf::from("pics/thumb.png"));
        assert!(output.contains("new file name is: thumb.png"));
    }

    #[test]
    fn test_prompts_are_written_in_order() {
        let (_, output) = run("1\n10\n20\ny\n");

        let choice = output.find(">> ").unwrap();
        let width = output.find("Width >> ").unwrap();
        let height = output.find("Height >> ").unwrap();
        let name = output.find("Use Default file name? >> [Y/n]: ").unwrap();
        assert!(choice < width && width < height && height < name);
    }

    #[test]
    fn test_non_integer_is_asked_again() {
        let (result, output) = run("one\n1\nwide\n30\n40\nyes\n");

        assert_eq!(result.unwrap().width, 30);
        assert!(output.contains("Error: 'one' is not a valid integer."));
        assert!(output.contains("Error: 'wide' is not a valid integer."));
    }

    #[test]
    fn test_unrecognised_confirmation_is_asked_again() {
        let (result, output) = run("1\n30\n40\nmaybe\nno\nsmall\n");

        assert_eq!(result.unwrap().file_name, OsString::from("small.png"));
        assert!(output.contains("Error: invalid input"));
    }

    #[test]
    fn test_choice_below_one_is_invalid() {
        let (result, _) = run("0\n");
        match result {
            Err(ImagineError::Validation(message)) => assert_eq!(message, "Enter a valid option"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_choice_above_menu_is_invalid() {
        let (result, _) = run("7\n");
        assert!(matches!(result, Err(ImagineError::Validation(_))));
    }

    #[test]
    fn test_convert_format_is_unsupported() {
        let (result, _) = run("2\n");
        assert!(matches!(result, Err(ImagineError::Unsupported(_))));
    }

    #[test]
    fn test_non_positive_dimension_is_invalid() {
        let (result, _) = run("1\n0\n100\n");
        assert!(matches!(result, Err(ImagineError::Validation(_))));

        let (result, _) = run("1\n100\n-5\n");
        assert!(matches!(result, Err(ImagineError::Validation(_))));
    }

    #[test]
    fn test_end_of_input_is_invalid() {
        let (result, _) = run("1\n100\n");
        assert!(matches!(result, Err(ImagineError::Validation(_))));
    }

    #[test]
    fn test_step_moves_through_states() {
        let mut input: &[u8] = b"1\n5\n6\n\n";
        let mut out = Vec::new();
        let mut prompt = Prompter::new(&mut input, &mut out);
        let mut dialog = ResizeDialog::new(Path::new("x.gif"), Path::new("."));

        assert_eq!(dialog.state(), &DialogState::AwaitChoice);
        dialog.step(&mut prompt).unwrap();
        assert_eq!(dialog.state(), &DialogState::AwaitDimensions);
        dialog.step(&mut prompt).unwrap();
        assert_eq!(
            dialog.state(),
            &DialogState::AwaitFilenameDecision { width: 5, height: 6 }
        );
        dialog.step(&mut prompt).unwrap();
        assert!(matches!(dialog.state(), DialogState::Execute(_)));
    }
}
