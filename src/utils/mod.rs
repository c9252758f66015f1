// imagine/src/utils/mod.rs
use crate::core::{ImagineError, Result};
use crate::processors::Status;
use colored::Colorize;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes `message` on its own line in the colour of `status`.
pub fn print_status<W: Write + ?Sized>(out: &mut W, status: Status, message: &str) -> Result<()> {
    writeln!(out, "{}", message.color(status.color()))?;
    Ok(())
}

/// Directory an image lives in; `.` for bare file names.
pub fn containing_folder(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// File name for a resized image. Without `custom` the source's own name is
/// reused; otherwise the sanitised base name gets the source's extension.
pub fn destination_file_name(source: &Path, custom: Option<&str>) -> Result<OsString> {
    match custom {
        None => source
            .file_name()
            .map(|name| name.to_os_string())
            .ok_or_else(|| ImagineError::Validation(format!("Not a file path: {}", source.display()))),
        Some(base) => {
            let base = sanitize_filename(base.trim());
            if base.is_empty() {
                return Err(ImagineError::Validation("File name cannot be empty".to_string()));
            }

            let mut name = OsString::from(base);
            if let Some(ext) = source.extension() {
                name.push(".");
                name.push(ext);
            }
            Ok(name)
        }
    }
}

pub fn sanitize_filename(filename: &str) -> String {
    let invalid_chars = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];
    filename
        .chars()
        .map(|c| if invalid_chars.contains(&c) { '_' } else { c })
        .collect()
}

pub fn image_format_to_string(format: image::ImageFormat) -> String {
    match format {
        image::ImageFormat::Jpeg => "JPEG",
        image::ImageFormat::Png => "PNG",
        image::ImageFormat::Gif => "GIF",
        image::ImageFormat::WebP => "WEBP",
        image::ImageFormat::Pnm => "PNM",
        image::ImageFormat::Tiff => "TIFF",
        image::ImageFormat::Tga => "TGA",
        image::ImageFormat::Dds => "DDS",
        image::ImageFormat::Bmp => "BMP",
        image::ImageFormat::Ico => "ICO",
        image::ImageFormat::Hdr => "HDR",
        image::ImageFormat::OpenExr => "OpenEXR",
        image::ImageFormat::Farbfeld => "Farbfeld",
        image::ImageFormat::Avif => "AVIF",
        image::ImageFormat::Qoi => "QOI",
        _ => "unknown",
    }
    .to_string()
}
