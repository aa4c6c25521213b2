//! Version control abstraction

use std::fs::File;

use globset::GlobSet;

use crate::error::Result;

/// Read access to the version-controlled project being published
///
/// Every operation works on the checked-out HEAD.
pub trait VcsProvider {
    /// Whether the working directory is inside a repository
    fn is_repository(&self) -> bool;

    /// Full history of HEAD, newest first, in the changelog log format
    /// (`addonship_changelog::LOG_FORMAT`, full decorations)
    fn export_commit_log(&self) -> Result<String>;

    /// Nearest tag reachable from HEAD
    ///
    /// Fails with `GitError::NoTags` when there is none.
    fn latest_tag_name(&self) -> Result<String>;

    /// Zip archive of the HEAD tree with every entry under `prefix`
    ///
    /// Paths matching `ignore` are left out. The returned file is positioned
    /// at its start.
    fn build_snapshot_archive(&self, prefix: &str, ignore: &GlobSet) -> Result<File>;
}
