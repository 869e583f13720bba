//! Error types for the filter engine.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Errors describing an unusable source image.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Source bitmap has a zero dimension
    #[error("Source image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    /// Source bytes could not be decoded into a bitmap
    #[error("Source image could not be decoded: {0}")]
    Undecodable(String),
}

/// Errors in the externally supplied filter configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Filter identifier does not name a known filter
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
    /// The same filter appears twice in one configured set
    #[error("Duplicate filter in set: {0}")]
    DuplicateFilter(String),
}

/// Main error type for the filter engine.
///
/// All errors in the crate are converted to this type before being
/// returned to the caller.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The source image failed validation
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// The configured filter set is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A filter application or run task failed
    #[error("Processing error: {0}")]
    Processing(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// Unsupported or invalid image format
    #[error("Format error: {0}")]
    Format(String),
}

/// Convenience result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

// Helper methods for error creation
impl FilterError {
    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }
}

// Convert std::io::Error to FilterError
impl From<io::Error> for FilterError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert image decode/encode errors to FilterError
impl From<image::ImageError> for FilterError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Self::IO(e.to_string()),
            image::ImageError::Unsupported(e) => Self::Format(e.to_string()),
            other => Self::Source(SourceError::Undecodable(other.to_string())),
        }
    }
}
