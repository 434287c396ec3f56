//! Error types for the CloudWatch agent configuration merger.

use std::path::PathBuf;
use thiserror::Error;

/// Document boundary errors: reading and writing configuration files.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("File {} not found or not readable: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {} is not a valid configuration document: {reason}", .path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("Error writing to output file {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Merge errors. Only raised when strict shape checking is requested.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Structural conflict at '{path}': first config has a {first}, second config has a {second}")]
    ShapeConflict {
        path: String,
        first: &'static str,
        second: &'static str,
    },
}

/// Top-level errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
