// imagine/src/processors/compressor.rs
use crate::core::{ImagineError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageError, ImageFormat};
use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;

/// Encodes images and writes them to disk.
pub struct Compressor {
    quality: u8,
}

impl Compressor {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Saves `image` in the format named by the destination's extension,
    /// replacing any existing file. Nothing is written if encoding fails.
    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        let format = output_format(path)?;

        let bytes = self.compress_to_bytes(image, format).map_err(|source| match source {
            ImageError::IoError(e) => ImagineError::Io(e),
            source => ImagineError::Encode {
                path: path.to_path_buf(),
                source,
            },
        })?;

        std::fs::write(path, &bytes)?;
        log::info!("Saved image: {} ({} bytes)", path.display(), bytes.len());

        Ok(())
    }

    pub fn compress_to_bytes(
        &self,
        image: &DynamicImage,
        format: ImageFormat,
    ) -> std::result::Result<Vec<u8>, ImageError> {
        log::debug!(
            "Encoding {}x{} image as {:?}, quality: {}",
            image.width(),
            image.height(),
            format,
            self.quality
        );

        let image = prepare_for(image, format);
        let mut buffer = Cursor::new(Vec::new());

        match format {
            ImageFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut buffer, self.quality);
                image.write_with_encoder(encoder)?;
            }
            _ => image.write_to(&mut buffer, format)?,
        }

        Ok(buffer.into_inner())
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new(85)
    }
}

/// Encoder for the destination's extension. Registered aliases that the
/// `image` crate does not know by name map onto their base format.
fn output_format(path: &Path) -> Result<ImageFormat> {
    let alias = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| match ext.to_lowercase().as_str() {
            "jpe" | "jif" | "jfi" | "jfif" => Some(ImageFormat::Jpeg),
            "dib" => Some(ImageFormat::Bmp),
            _ => None,
        });

    match alias {
        Some(format) => Ok(format),
        None => ImageFormat::from_path(path).map_err(|source| ImagineError::Encode {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Converts to a colour layout the target encoder accepts.
fn prepare_for(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    let color = image.color();
    match format {
        ImageFormat::Jpeg if !matches!(color, ColorType::L8 | ColorType::Rgb8) => {
            if color.has_color() {
                Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
            } else {
                Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
            }
        }
        ImageFormat::WebP | ImageFormat::Gif | ImageFormat::Bmp
            if !matches!(color, ColorType::Rgb8 | ColorType::Rgba8) =>
        {
            if color.has_alpha() {
                Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
            } else {
                Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
            }
        }
        _ => Cow::Borrowed(image),
    }
}
