// imagine/src/processors/mod.rs
mod compressor;
mod extensions;
mod loader;
mod resizer;
mod scanner;

pub use compressor::Compressor;
pub use extensions::{is_image, suffix, Status, IMAGE_EXTENSIONS};
pub use loader::{LoadedImage, Loader};
pub use resizer::{contain_dimensions, Resizer};
pub use scanner::Scanner;
