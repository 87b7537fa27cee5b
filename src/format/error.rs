//! Error types for document persistence.

use thiserror::Error;

/// Errors that can occur while saving or loading a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document violates the persisted schema
    #[error("malformed document: {message}")]
    MalformedDocument {
        /// Description of the schema violation
        message: String,
    },
}

impl DocumentError {
    /// Create a malformed-document error with a message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}
