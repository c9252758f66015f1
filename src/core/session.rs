// imagine/src/core/session.rs
use super::{ImagineError, Result};
use crate::processors::Scanner;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkingDir {
    #[default]
    Unset,
    Set(PathBuf),
}

impl fmt::Display for WorkingDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkingDir::Unset => f.write_str("unset"),
            WorkingDir::Set(path) => write!(f, "{}", path.display()),
        }
    }
}

/// State shared by the commands of one invocation. The working directory
/// is informational: other commands print it but never resolve paths
/// against it.
#[derive(Debug, Default)]
pub struct Session {
    working_dir: WorkingDir,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn working_dir(&self) -> &WorkingDir {
        &self.working_dir
    }

    /// Records `directory` as the working directory if at least one
    /// registered image exists anywhere below it. Returns how many were
    /// found; on failure the session is left untouched.
    pub fn set_working_dir(&mut self, directory: &Path, scanner: &Scanner) -> Result<usize> {
        let count = scanner.count_images(directory)?;
        if count == 0 {
            return Err(ImagineError::Validation(
                "Supported image(s) format not found in directory".to_string(),
            ));
        }

        log::debug!("Working directory set to {} ({} images)", directory.display(), count);
        self.working_dir = WorkingDir::Set(directory.to_path_buf());

        Ok(count)
    }
}
