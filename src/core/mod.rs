// imagine/src/core/mod.rs
pub mod dialog;
pub mod dispatcher;
pub mod session;

use image::{ColorType, ImageFormat};
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeAlgorithm {
    Nearest,
    Bilinear,
    Bicubic,
    #[default]
    Lanczos3,
}

/// Tunables for `process-image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSettings {
    pub algorithm: ResizeAlgorithm,
    /// JPEG quality of the written file (1-100). Ignored by lossless formats.
    pub quality: u8,
}

impl Default for ProcessSettings {
    fn default() -> Self {
        Self {
            algorithm: ResizeAlgorithm::Lanczos3,
            quality: 85,
        }
    }
}

impl ProcessSettings {
    pub fn validate(&self) -> Result<()> {
        if self.quality == 0 || self.quality > 100 {
            return Err(ImagineError::Validation(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

/// Channel layout and depth of an image, printed the way image tools
/// conventionally name it (`RGB`, `RGBA`, `L`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMode(pub ColorType);

impl ColorMode {
    pub fn name(&self) -> &'static str {
        match self.0 {
            ColorType::L8 => "L",
            ColorType::La8 => "LA",
            ColorType::Rgb8 => "RGB",
            ColorType::Rgba8 => "RGBA",
            ColorType::L16 => "I;16",
            ColorType::La16 => "LA;16",
            ColorType::Rgb16 => "RGB;16",
            ColorType::Rgba16 => "RGBA;16",
            ColorType::Rgb32F => "RGB;F32",
            ColorType::Rgba32F => "RGBA;F32",
            _ => "unknown",
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only projection of an opened image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    /// Encoding the image was read from, if it could be identified.
    pub format: Option<ImageFormat>,
    pub width: u32,
    pub height: u32,
    pub mode: ColorMode,
}

impl ImageMetadata {
    pub fn format_name(&self) -> String {
        self.format
            .map(crate::utils::image_format_to_string)
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// All three fields on one line.
    pub fn summary(&self) -> String {
        format!(
            "format: {}, size: ({}, {}) mode: {}",
            self.format_name(),
            self.width,
            self.height,
            self.mode
        )
    }

    /// Lines printed by `image-info`: the summary when no field was
    /// requested, otherwise one line per requested field in size, mode,
    /// format order.
    pub fn describe(&self, fields: InfoFields) -> Vec<String> {
        if fields.is_empty() {
            return vec![self.summary()];
        }

        let mut lines = Vec::new();
        if fields.size {
            lines.push(format!("Width: {} Height: {}", self.width, self.height));
        }
        if fields.mode {
            lines.push(format!("Mode: {}", self.mode));
        }
        if fields.format {
            lines.push(format!("Format: {}", self.format_name()));
        }
        lines
    }
}

/// Which metadata fields `image-info` should print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoFields {
    pub size: bool,
    pub mode: bool,
    pub format: bool,
}

impl InfoFields {
    pub fn is_empty(&self) -> bool {
        !self.size && !self.mode && !self.format
    }
}

/// A fully gathered resize: what to read, how big, where to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeRequest {
    pub source: PathBuf,
    pub width: u32,
    pub height: u32,
    pub file_name: OsString,
    pub save_dir: PathBuf,
}

impl ResizeRequest {
    pub fn destination(&self) -> PathBuf {
        self.save_dir.join(&self.file_name)
    }
}

#[derive(Error, Debug)]
pub enum ImagineError {
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{0}")]
    Validation(String),

    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not supported yet: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, ImagineError>;
