// imagine/src/processors/scanner.rs
use super::extensions::is_image;
use crate::core::{ImagineError, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Lists directory contents for `show-images` and `set-working-dir`.
#[derive(Debug, Clone, Default)]
pub struct Scanner;

impl Scanner {
    pub fn new() -> Self {
        Self
    }

    /// Non-recursive: every immediate child that is not a directory, any
    /// extension. Recursive: every registered image at any depth, each
    /// visited once. Symlinks count as the files they point to but linked
    /// directories are not descended into. Order follows the filesystem
    /// and is not sorted.
    pub fn scan(&self, directory: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
        self.validate_directory(directory)?;

        let paths: Vec<PathBuf> = if recursive {
            self.walk(WalkDir::new(directory))
                .filter(|entry| !entry.path().is_dir() && is_image(entry.path()))
                .map(DirEntry::into_path)
                .collect()
        } else {
            self.walk(WalkDir::new(directory).min_depth(1).max_depth(1))
                .filter(|entry| !entry.path().is_dir())
                .map(DirEntry::into_path)
                .collect()
        };

        log::debug!(
            "Scanned {} ({}): {} entries",
            directory.display(),
            if recursive { "recursive" } else { "flat" },
            paths.len()
        );

        Ok(paths)
    }

    /// Number of registered images anywhere below `directory`.
    pub fn count_images(&self, directory: &Path) -> Result<usize> {
        Ok(self.scan(directory, true)?.len())
    }

    fn walk(&self, walker: WalkDir) -> impl Iterator<Item = DirEntry> {
        walker
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
    }

    fn validate_directory(&self, directory: &Path) -> Result<()> {
        if !directory.is_dir() {
            return Err(ImagineError::NotFound(directory.to_path_buf()));
        }

        Ok(())
    }
}
