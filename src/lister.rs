//! Lazy expansion of a glob pattern into image sizes.
//!
//! Nothing is opened until the iterator is advanced, and each file is closed
//! before the next one is opened.

use crate::error::Result;
use crate::size::{ImageSize, read_image_size};
use glob::{MatchOptions, Paths};

/// The spine collection, relative to the directory the tool is run from.
pub const DEFAULT_PATTERN: &str = "../res/spines/*.jpg";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Single-pass iterator over the sizes of every file matching a pattern.
pub struct ImageSizes {
    paths: Paths,
}

impl Iterator for ImageSizes {
    type Item = Result<ImageSize>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.paths.next()?;
        Some(entry.map_err(Into::into).and_then(|path| read_image_size(&path)))
    }
}

/// Same sequence as [`ImageSizes`], rendered as `path\twidth\theight` lines.
pub struct ImagesMetadata {
    sizes: ImageSizes,
}

impl Iterator for ImagesMetadata {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.sizes
            .next()
            .map(|size| size.map(|size| size.to_string()))
    }
}

pub fn image_sizes(pattern: &str) -> Result<ImageSizes> {
    tracing::debug!("Expanding {}", pattern);
    let paths = glob::glob_with(pattern, MATCH_OPTIONS)?;
    Ok(ImageSizes { paths })
}

pub fn images_metadata(pattern: &str) -> Result<ImagesMetadata> {
    Ok(ImagesMetadata {
        sizes: image_sizes(pattern)?,
    })
}
