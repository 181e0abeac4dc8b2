pub mod error;
pub mod lister;
pub mod logging;
pub mod report;
pub mod size;

pub use error::{Result, SizeError};
pub use lister::{DEFAULT_PATTERN, ImageSizes, ImagesMetadata, image_sizes, images_metadata};
pub use report::render_report;
pub use size::{ImageSize, read_image_size};
