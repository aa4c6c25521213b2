//! Decorated commit log export

use std::collections::HashMap;

use addonship_changelog::parser::write_record;
use git2::{Oid, Sort};
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};

const TAG_PREFIX: &str = "refs/tags/";

impl GitRepo {
    /// Ref names pointing at each commit, formatted like `git log --decorate=full`
    ///
    /// Annotated tags are peeled to the commit they tag. When HEAD is a
    /// branch it is shown as `HEAD -> refs/heads/<branch>` and the branch is
    /// not repeated.
    pub fn decorations(&self) -> Result<HashMap<Oid, Vec<String>>> {
        let mut decorations: HashMap<Oid, Vec<String>> = HashMap::new();

        let head = self.repo.head().ok();
        let head_branch = head
            .as_ref()
            .filter(|h| h.is_branch())
            .and_then(|h| h.name())
            .map(str::to_string);

        if let Some(oid) = head.as_ref().and_then(|h| h.peel_to_commit().ok()).map(|c| c.id()) {
            let label = match &head_branch {
                Some(branch) => format!("HEAD -> {}", branch),
                None => "HEAD".to_string(),
            };
            decorations.entry(oid).or_default().push(label);
        }

        let mut refs: Vec<(String, Oid)> = Vec::new();
        for reference in self.repo.references()? {
            let reference = reference?;
            let Some(name) = reference.name().map(str::to_string) else {
                continue;
            };
            if Some(&name) == head_branch.as_ref()
                || (reference.is_remote() && name.ends_with("/HEAD"))
            {
                continue;
            }
            if let Ok(commit) = reference.peel_to_commit() {
                refs.push((name, commit.id()));
            }
        }

        // Tags first, then branches and everything else, each alphabetical
        refs.sort_by(|(a, _), (b, _)| {
            (!a.starts_with(TAG_PREFIX), a).cmp(&(!b.starts_with(TAG_PREFIX), b))
        });

        for (name, oid) in refs {
            let label = if name.starts_with(TAG_PREFIX) {
                format!("tag: {}", name)
            } else {
                name
            };
            decorations.entry(oid).or_default().push(label);
        }

        Ok(decorations)
    }

    /// Export the history of HEAD, newest first, in the changelog log format
    #[instrument(skip(self), fields(path = %self.path().display()))]
    pub fn export_log(&self) -> Result<String> {
        let head = self.head_commit()?;
        let decorations = self.decorations()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;

        let mut out = String::new();
        let mut count = 0usize;
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            let decoration = decorations
                .get(&oid)
                .map(|labels| format!(" ({})", labels.join(", ")))
                .unwrap_or_default();
            let short_id = commit.as_object().short_id()?;
            let short_hash = short_id.as_str().unwrap_or_default();

            write_record(
                &mut out,
                &decoration,
                short_hash,
                commit.time().seconds(),
                commit.summary().unwrap_or_default(),
            );
            count += 1;
        }

        debug!(count, "exported commit log");
        Ok(out)
    }
}
