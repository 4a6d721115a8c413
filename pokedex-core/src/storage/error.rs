//! Storage error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`super::KeyValueStore`]
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key contains characters that cannot be stored safely
    #[error("Invalid storage key '{key}': keys may only contain letters, digits, '_', '-' and '.', and may not start with '.'")]
    InvalidKey { key: String },

    /// Failed to read a stored value
    #[error("Failed to read '{key}' from {path}")]
    Read {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a value
    #[error("Failed to write '{key}' to {path}")]
    Write {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to delete a value
    #[error("Failed to delete '{key}' at {path}")]
    Delete {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing store cannot be used at all
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
