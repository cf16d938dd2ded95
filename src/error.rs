//! Error types for project map generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by serialization, rasterization and artifact persistence
#[derive(Debug, Error)]
pub enum ProjectMapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("Font unavailable at {path:?}: {reason}")]
    FontUnavailable { path: PathBuf, reason: String },

    #[error("Font file {path:?} is not a usable font face")]
    InvalidFont { path: PathBuf },

    #[error("Image encoding failed: {0}")]
    ImageEncode(#[from] image::ImageError),

    #[error("Failed to write {path:?}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<config::ConfigError> for ProjectMapError {
    fn from(err: config::ConfigError) -> Self {
        ProjectMapError::Config(err.to_string())
    }
}

impl From<walkdir::Error> for ProjectMapError {
    fn from(err: walkdir::Error) -> Self {
        ProjectMapError::Walk(err.to_string())
    }
}
