//! Tag operations

use git2::{DescribeFormatOptions, DescribeOptions};
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use addonship_core::error::GitError;

impl GitRepo {
    /// Nearest tag reachable from HEAD, like `git describe --tags --abbrev=0`
    #[instrument(skip(self))]
    pub fn latest_tag_name(&self) -> Result<String> {
        let head = self.head_commit()?;

        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = head.as_object().describe(&options).map_err(|e| {
            if e.class() == git2::ErrorClass::Describe || e.code() == git2::ErrorCode::NotFound {
                GitError::NoTags("HEAD".to_string())
            } else {
                GitError::Git2(e)
            }
        })?;

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        let name = describe.format(Some(&format))?;

        debug!(tag = %name, "found latest tag");
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{annotated_tag, commit_file, init_repo, tag};

    #[test]
    fn test_latest_tag_on_head() {
        let (temp, repo) = init_repo();
        let oid = commit_file(&repo, "a.lua", "a", "First", 1_000);
        tag(&repo, "v1.0", oid);

        let git_repo = GitRepo::open(temp.path()).unwrap();
        assert_eq!(git_repo.latest_tag_name().unwrap(), "v1.0");
    }

    #[test]
    fn test_latest_tag_behind_head() {
        let (temp, repo) = init_repo();
        let first = commit_file(&repo, "a.lua", "a", "First", 1_000);
        let second = commit_file(&repo, "b.lua", "b", "Second", 2_000);
        commit_file(&repo, "c.lua", "c", "Third", 3_000);
        tag(&repo, "v1.0", first);
        annotated_tag(&repo, "v1.1", second);

        let git_repo = GitRepo::open(temp.path()).unwrap();
        assert_eq!(git_repo.latest_tag_name().unwrap(), "v1.1");
    }

    #[test]
    fn test_no_tags() {
        let (temp, repo) = init_repo();
        commit_file(&repo, "a.lua", "a", "First", 1_000);

        let git_repo = GitRepo::open(temp.path()).unwrap();
        assert!(matches!(git_repo.latest_tag_name(), Err(GitError::NoTags(_))));
    }

    #[test]
    fn test_tag_on_other_branch_is_not_reachable() {
        let (temp, repo) = init_repo();
        let first = commit_file(&repo, "a.lua", "a", "First", 1_000);
        let main = repo.head().unwrap().name().unwrap().to_string();
        let side = repo.find_commit(first).unwrap();
        repo.branch("side", &side, false).unwrap();
        repo.set_head("refs/heads/side").unwrap();
        let tagged = commit_file(&repo, "b.lua", "b", "Side", 2_000);
        tag(&repo, "v0.1", tagged);
        repo.set_head(&main).unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        match git_repo.latest_tag_name() {
            Err(GitError::NoTags(rev)) => assert_eq!(rev, "HEAD"),
            other => panic!("expected no tags, got {other:?}"),
        }
    }

    #[test]
    fn test_no_commits() {
        let (temp, _repo) = init_repo();
        let git_repo = GitRepo::open(temp.path()).unwrap();
        assert!(matches!(git_repo.latest_tag_name(), Err(GitError::NoCommits)));
    }
}
