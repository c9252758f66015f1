// imagine/src/processors/loader.rs
use crate::core::{ColorMode, ImageMetadata, ImagineError, Result};
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::path::Path;

/// An opened image together with the metadata read while opening it.
pub struct LoadedImage {
    pub image: DynamicImage,
    pub metadata: ImageMetadata,
}

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the full image.
    pub fn load(&self, path: &Path) -> Result<LoadedImage> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_path(path)?;

        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader.format();
        let image = reader.decode().map_err(|source| ImagineError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let metadata = ImageMetadata {
            format,
            width: image.width(),
            height: image.height(),
            mode: ColorMode(image.color()),
        };

        log::info!(
            "Loaded image: {}x{} pixels, mode: {}",
            metadata.width,
            metadata.height,
            metadata.mode
        );

        Ok(LoadedImage { image, metadata })
    }

    /// Reads format, size and mode from the header without decoding pixels.
    pub fn read_metadata(&self, path: &Path) -> Result<ImageMetadata> {
        self.validate_path(path)?;

        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader.format();
        let decoder = reader.into_decoder().map_err(|source| ImagineError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let (width, height) = decoder.dimensions();
        Ok(ImageMetadata {
            format,
            width,
            height,
            mode: ColorMode(decoder.color_type()),
        })
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(ImagineError::NotFound(path.to_path_buf()));
        }

        Ok(())
    }
}
