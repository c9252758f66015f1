// imagine/src/processors/resizer.rs
use crate::core::ResizeAlgorithm;
use image::{imageops::FilterType, DynamicImage};

pub struct Resizer {
    algorithm: ResizeAlgorithm,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Scales `image` down to fit inside `max_width` x `max_height`,
    /// keeping its aspect ratio. Images already inside the box come back
    /// unchanged.
    pub fn fit_within(&self, image: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
        let (width, height) = contain_dimensions(image.width(), image.height(), max_width, max_height);

        if width == image.width() && height == image.height() {
            log::debug!("Image already fits {}x{}, skipping resize", max_width, max_height);
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        image.resize_exact(width, height, self.get_filter_type())
    }

    fn get_filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Largest size with the source's aspect ratio that fits the box, never
/// larger than the source itself. Each side is at least one pixel.
pub fn contain_dimensions(orig_w: u32, orig_h: u32, box_w: u32, box_h: u32) -> (u32, u32) {
    if orig_w == 0 || orig_h == 0 || (orig_w <= box_w && orig_h <= box_h) {
        return (orig_w, orig_h);
    }

    let ratio_w = box_w as f64 / orig_w as f64;
    let ratio_h = box_h as f64 / orig_h as f64;
    let ratio = ratio_w.min(ratio_h);

    let new_w = ((orig_w as f64 * ratio).round() as u32).clamp(1, box_w.max(1));
    let new_h = ((orig_h as f64 * ratio).round() as u32).clamp(1, box_h.max(1));

    (new_w, new_h)
}
