pub mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{parse_chain, split_chain, Algorithm, Cli, Commands};
pub use crate::core::dialog::{DialogState, InputSource, MenuChoice, Prompter, ResizeDialog};
pub use crate::core::dispatcher::Dispatcher;
pub use crate::core::session::{Session, WorkingDir};
pub use crate::core::{
    ColorMode, ImageMetadata, ImagineError, InfoFields, ProcessSettings, ResizeAlgorithm,
    ResizeRequest, Result,
};
pub use processors::{
    contain_dimensions, is_image, suffix, Compressor, LoadedImage, Loader, Resizer, Scanner,
    Status, IMAGE_EXTENSIONS,
};
pub use utils::{containing_folder, destination_file_name, sanitize_filename};
