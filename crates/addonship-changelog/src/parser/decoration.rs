//! Ref decoration matching
//!
//! A decoration is the `%d` placeholder of `git log --decorate=full`, e.g.
//! ` (HEAD -> refs/heads/main, tag: refs/tags/v1.2, refs/remotes/origin/main)`.
//! Tags and branches are matched independently; neither match depends on
//! the other being present or on their order in the string.

use regex::Regex;
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"refs/tags/(?P<name>.*?)[,)]").expect("Invalid regex"));

static BRANCH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"refs/heads/(?P<name>.*?)[,)]").expect("Invalid regex"));

/// First tag named in the decoration
pub fn tag_ref(decoration: &str) -> Option<&str> {
    capture(&TAG_REGEX, decoration)
}

/// First local branch named in the decoration
pub fn branch_ref(decoration: &str) -> Option<&str> {
    capture(&BRANCH_REGEX, decoration)
}

fn capture<'a>(regex: &Regex, decoration: &'a str) -> Option<&'a str> {
    regex
        .captures(decoration)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}
