//! Changelog error types

use thiserror::Error;

/// Result type for changelog operations
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A log record could not be parsed
    #[error("Failed to parse commit log record {record}: {message}")]
    Parse { record: usize, message: String },
}

impl ChangelogError {
    pub(crate) fn parse(record: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            record,
            message: message.into(),
        }
    }
}
