use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while expanding the pattern or reading an image header.
#[derive(Debug, Error)]
pub enum SizeError {
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to enumerate {}", .0.path().display())]
    Glob(#[from] glob::GlobError),

    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read image size of {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl SizeError {
    /// The file the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SizeError::Pattern(_) => None,
            SizeError::Glob(e) => Some(e.path()),
            SizeError::Open { path, .. } | SizeError::Decode { path, .. } => Some(path),
        }
    }
}

pub type Result<T> = std::result::Result<T, SizeError>;
