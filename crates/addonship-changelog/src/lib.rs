//! addonship Changelog - Changelog generation from git history
//!
//! This crate turns the decorated one-line-per-commit log export into
//! [`CommitRecord`]s, groups them into release sections and renders the
//! text attached to an uploaded file.

pub mod error;
pub mod formatter;
pub mod generator;
pub mod parser;
mod renderer;
pub mod types;

pub use error::{ChangelogError, Result};
pub use formatter::{ChangelogFormatter, ChangelogStyle, MarkdownFormatter, PlainFormatter};
pub use generator::ChangelogBuilder;
pub use parser::{parse_commit_log, LOG_FORMAT, RECORD_SENTINEL};
pub use renderer::build_sections;
pub use types::{ChangelogSection, CommitRecord, CommitRef};
