//! git2-backed version control provider

use std::fs::File;
use std::path::{Path, PathBuf};

use addonship_core::error::{GitError, Result};
use addonship_core::VcsProvider;
use globset::GlobSet;
use tracing::debug;

use crate::repository::GitRepo;

/// [`VcsProvider`] for the git repository containing a directory
pub struct GitVcs {
    path: PathBuf,
    repo: Option<GitRepo>,
}

impl GitVcs {
    /// Look for a repository at `path` or in its parents
    ///
    /// Not finding one is not an error here; [`VcsProvider::is_repository`]
    /// reports it and every other operation fails with `NotARepository`.
    pub fn discover(path: &Path) -> Self {
        let repo = match GitRepo::discover(path) {
            Ok(repo) => Some(repo),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no usable git repository");
                None
            }
        };

        Self {
            path: path.to_path_buf(),
            repo,
        }
    }

    fn repo(&self) -> Result<&GitRepo> {
        self.repo
            .as_ref()
            .ok_or_else(|| GitError::NotARepository(self.path.clone()).into())
    }
}

impl VcsProvider for GitVcs {
    fn is_repository(&self) -> bool {
        self.repo.is_some()
    }

    fn export_commit_log(&self) -> Result<String> {
        Ok(self.repo()?.export_log()?)
    }

    fn latest_tag_name(&self) -> Result<String> {
        Ok(self.repo()?.latest_tag_name()?)
    }

    fn build_snapshot_archive(&self, prefix: &str, ignore: &GlobSet) -> Result<File> {
        Ok(self.repo()?.snapshot_archive(prefix, ignore)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{commit_file, init_repo, tag};
    use addonship_core::AddonshipError;
    use tempfile::TempDir;

    #[test]
    fn test_outside_repository() {
        let temp = TempDir::new().unwrap();
        let vcs = GitVcs::discover(temp.path());

        assert!(!vcs.is_repository());
        assert!(matches!(
            vcs.export_commit_log(),
            Err(AddonshipError::Git(GitError::NotARepository(_)))
        ));
        assert!(matches!(
            vcs.build_snapshot_archive("A/", &GlobSet::empty()),
            Err(AddonshipError::Git(GitError::NotARepository(_)))
        ));
    }

    #[test]
    fn test_inside_repository() {
        let (temp, repo) = init_repo();
        let oid = commit_file(&repo, "Core.lua", "x", "Initial", 1_000);
        tag(&repo, "v0.1", oid);
        let nested = temp.path().join("Modules");
        std::fs::create_dir_all(&nested).unwrap();

        let vcs = GitVcs::discover(&nested);

        assert!(vcs.is_repository());
        assert_eq!(vcs.latest_tag_name().unwrap(), "v0.1");
        assert!(vcs.export_commit_log().unwrap().contains("|||Initial|||__END__"));
        let archive = vcs.build_snapshot_archive("A/", &GlobSet::empty()).unwrap();
        assert!(archive.metadata().unwrap().len() > 0);
    }
}
