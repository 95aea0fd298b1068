//! Error types for the phone book crawler.
//!
//! Infrastructure errors use `thiserror`. Domain validation errors live in
//! [`crate::domain::ValidationError`]. A lookup miss is never an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading directory entries from a seed file.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The seed file could not be read
    #[error("Failed to read directory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a valid list of entries
    #[error("Invalid directory data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
