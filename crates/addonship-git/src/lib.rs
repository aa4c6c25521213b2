//! addonship Git - Git operations for release publishing
//!
//! This crate reads everything a release needs from a git repository: the
//! decorated commit log, the latest tag and a zip snapshot of HEAD.

mod archive;
mod log;
mod repository;
mod tags;
mod vcs;

#[cfg(test)]
mod fixtures;

pub use repository::{GitRepo, Result};
pub use vcs::GitVcs;
