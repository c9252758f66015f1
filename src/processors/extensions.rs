// imagine/src/processors/extensions.rs
use colored::Color;
use std::path::Path;

/// Suffixes (leading dot included) recognised as image files. Matching is
/// case-sensitive: `photo.PNG` is not an image as far as the scanner is
/// concerned.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".jpe", ".jif", ".jfif", ".jfi", ".gif", ".webp", ".tiff", ".tif",
    ".svg", ".svgz", ".heif", ".heic", ".bmp", ".dib",
];

/// Outcome of a user-facing message, mapped to a terminal colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failed,
}

impl Status {
    pub fn color(self) -> Color {
        match self {
            Status::Success => Color::Green,
            Status::Failed => Color::Red,
        }
    }
}

/// Last suffix of the file name, with its leading dot. Dotfiles such as
/// `.png` have no suffix.
pub fn suffix(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
}

pub fn is_image(path: &Path) -> bool {
    suffix(path)
        .map(|suffix| IMAGE_EXTENSIONS.contains(&suffix.as_str()))
        .unwrap_or(false)
}
