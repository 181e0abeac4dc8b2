use crate::error::{Result, SizeError};
use image::ImageReader;
use std::fmt;
use std::path::{Path, PathBuf};

/// Pixel dimensions of one image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSize {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }
}

/// Renders the tab-separated `path\twidth\theight` line, without a newline.
impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.path.display(),
            self.width,
            self.height
        )
    }
}

/// Reads the dimensions of the image at `path` from its header.
///
/// The format is guessed from the leading bytes, falling back to the file
/// extension. Pixel data is never decoded. The file handle is owned by the
/// reader and closed when this function returns, on either path.
pub fn read_image_size(path: &Path) -> Result<ImageSize> {
    let open_err = |source: std::io::Error| SizeError::Open {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?;

    let (width, height) = reader.into_dimensions().map_err(|source| SizeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("{}: {}x{}", path.display(), width, height);

    Ok(ImageSize::new(path, width, height))
}
