//! Error types for the image manipulator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, ManipulatorError>;

/// Errors that can occur while loading, transforming or saving an image.
#[derive(Error, Debug)]
pub enum ManipulatorError {
    /// File extension is not one of bmp, jpg, png
    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    /// Input could not be read or decoded
    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output could not be encoded or written
    #[error("Error writing file to disk {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Source or target size has a zero side
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Only one of width/height was supplied for the thumbnail
    #[error("Thumbnail width and height must be given together (width: {width:?}, height: {height:?})")]
    PartialThumbnailSize {
        width: Option<u32>,
        height: Option<u32>,
    },

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),
}

impl From<toml::de::Error> for ManipulatorError {
    fn from(err: toml::de::Error) -> Self {
        ManipulatorError::ConfigParse(err.to_string())
    }
}

impl From<serde_json::Error> for ManipulatorError {
    fn from(err: serde_json::Error) -> Self {
        ManipulatorError::ConfigParse(err.to_string())
    }
}
