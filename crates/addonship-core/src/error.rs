//! Error types for addonship

use std::path::PathBuf;
use thiserror::Error;

pub use addonship_changelog::ChangelogError;
pub use addonship_stores::StoreError;

/// Result type alias using AddonshipError
pub type Result<T> = std::result::Result<T, AddonshipError>;

/// Main error type for addonship operations
#[derive(Debug, Error)]
pub enum AddonshipError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Release upload errors
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Workflow-related errors
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("Failed to parse {path}: {source}")]
    YamlError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Manual changelog could not be read
    #[error("Failed to read manual changelog {path}: {source}")]
    ManualChangelog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// No commits found
    #[error("No commits found in repository")]
    NoCommits,

    /// No tag reachable from HEAD
    #[error("No tags reachable from {0}")]
    NoTags(String),

    /// Failed to build the snapshot archive
    #[error("Failed to build archive: {0}")]
    Archive(String),

    /// IO error while reading or writing repository data
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Workflow-related errors
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Pre-condition not met
    #[error("Pre-condition not met: {0}")]
    PreConditionFailed(String),
}

impl AddonshipError {
    /// Whether the release service rejected the upload's fields
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Store(StoreError::Validation(_)))
    }
}
