//! addonship core - shared types and workflow orchestration
//!
//! This crate provides error handling, `.pkgmeta` configuration, the
//! version-control abstraction and the publish workflow that ties the
//! changelog builder to the release client.

pub mod config;
pub mod error;
pub mod vcs;
pub mod workflow;

pub use config::{ManualChangelog, PkgMeta};
pub use error::{AddonshipError, ConfigError, GitError, Result, WorkflowError};
pub use vcs::VcsProvider;
pub use workflow::{changelog_text, ChangelogText, PublishOptions, PublishResult, PublishWorkflow};
