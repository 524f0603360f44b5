//! Error handling for the error report client
//!
//! This module provides the client's error taxonomy:
//! - Fatal payload errors (missing file, malformed JSON)
//! - I/O errors from the optional sample-file write
//! - Configuration errors (bad URL, unbuildable HTTP client)
//!
//! Network and HTTP failures are deliberately NOT part of this taxonomy:
//! they are classified into a failed `SubmissionOutcome` by the submission
//! client instead of propagating as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for error report client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Main error type for the error report client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The payload file path does not exist
    #[error("payload file '{}' not found", .path.display())]
    PayloadNotFound { path: PathBuf },

    /// The payload file content failed to parse as JSON
    #[error("invalid JSON in payload file: {0}")]
    InvalidPayload(String),

    /// Filesystem errors reading a payload or writing the sample file
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid server URL or unbuildable HTTP client
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create a payload-not-found error
    pub fn payload_not_found(path: impl Into<PathBuf>) -> Self {
        ClientError::PayloadNotFound { path: path.into() }
    }

    /// Create an invalid payload error
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        ClientError::InvalidPayload(message.into())
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>) -> Self {
        ClientError::Io(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        ClientError::Configuration(message.into())
    }
}

/// Convert JSON parse errors to ClientError
impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::invalid_payload(err.to_string())
    }
}
