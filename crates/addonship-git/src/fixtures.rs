//! Repository builders for tests

use std::path::Path;

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

pub fn init_repo() -> (TempDir, Repository) {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();
    (temp, repo)
}

/// Write `path` in the worktree and commit it on HEAD at `epoch`
pub fn commit_file(repo: &Repository, path: &str, content: &str, message: &str, epoch: i64) -> Oid {
    let workdir = repo.workdir().unwrap();
    let full = workdir.join(path);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&full, content).unwrap();
    commit_paths(repo, &[path], message, epoch)
}

/// Stage existing worktree paths and commit them on HEAD at `epoch`
pub fn commit_paths(repo: &Repository, paths: &[&str], message: &str, epoch: i64) -> Oid {
    let mut index = repo.index().unwrap();
    for path in paths {
        index.add_path(Path::new(path)).unwrap();
    }
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = Signature::new("Test", "test@example.com", &Time::new(epoch, 0)).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

pub fn tag(repo: &Repository, name: &str, target: Oid) {
    let commit = repo.find_commit(target).unwrap();
    repo.tag_lightweight(name, commit.as_object(), false).unwrap();
}

pub fn annotated_tag(repo: &Repository, name: &str, target: Oid) {
    let commit = repo.find_commit(target).unwrap();
    let sig = Signature::new("Test", "test@example.com", &Time::new(0, 0)).unwrap();
    repo.tag(name, commit.as_object(), &sig, name, false).unwrap();
}
