//! Custom error types for the jmdict-reader crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum DictError {
    /// The input is not well-formed XML.
    #[error("Error parsing {format} file: {message}")]
    Syntax {
        format: &'static str,
        message: String,
    },

    /// The input is well-formed XML but a mandatory element or value is missing or invalid.
    #[error("Invalid dictionary structure: {0}")]
    Structural(String),

    /// The source file could not be read.
    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error originating from I/O operations on the output side.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The decoded records could not be serialized to JSON.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl DictError {
    pub(crate) fn structural(message: impl Into<String>) -> Self {
        DictError::Structural(message.into())
    }
}

/// A convenience `Result` type alias using the crate's `DictError` type.
pub type Result<T> = std::result::Result<T, DictError>;
