//! Store error types

use thiserror::Error;

use crate::types::ValidationErrors;

/// Store-related errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request could not be sent or its response not read
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body was not the JSON the service documents
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A game version id that is not a number
    #[error("Invalid game version id '{0}': not a number")]
    Format(String),

    /// The service rejected individual fields of the upload
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Any other unsuccessful response to `operation`
    #[error("{operation} failed: [status {status}] {body}")]
    Remote {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
