//! Error types for dockerimages
//!
//! Library code returns `ImagesError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RuntimeError;
use crate::domain::value_objects::ImageOrigin;

/// Result type alias for dockerimages operations
pub type ImagesResult<T> = Result<T, ImagesError>;

/// Main error type for dockerimages operations
#[derive(Error, Debug)]
pub enum ImagesError {
    /// Every source came up empty
    #[error("no images specified")]
    NoImages,

    /// Image list file missing or unreadable
    #[error("failed to read image list {}: {source}", path.display())]
    ImageListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Compose file missing or unreadable
    #[error("failed to read compose file {}: {source}", path.display())]
    ComposeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Compose file is not valid YAML or has the wrong shape
    #[error("invalid compose file {}: {message}", path.display())]
    ComposeParse { path: PathBuf, message: String },

    /// Empty name or a name with embedded whitespace
    #[error("invalid image name '{name}' from {origin}")]
    InvalidImageName { name: String, origin: ImageOrigin },

    /// The runtime reported no local images for the picker
    #[error("no local images found")]
    NoLocalImages,

    /// Interactive selection requested without a TTY
    #[error("interactive selection requires a terminal")]
    NotInteractive,

    /// User aborted the picker
    #[error("operation cancelled")]
    SelectionCancelled,

    /// User confirmed the picker with nothing ticked
    #[error("no images selected")]
    NoSelection,

    /// Terminal failure inside the picker
    #[error("selection error: {0}")]
    Selection(String),

    #[error("failed to list local images: {0}")]
    ListImages(#[source] RuntimeError),

    #[error("failed to pull image {image}: {source}")]
    Pull {
        image: String,
        #[source]
        source: RuntimeError,
    },

    #[error("failed to save {}: {source}", target.display())]
    Save {
        target: PathBuf,
        #[source]
        source: RuntimeError,
    },

    /// Gzip pass over a saved archive failed
    #[error("failed to compress {}: {source}", path.display())]
    Compress {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
