//! Changelog types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The ref a commit is grouped under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum CommitRef {
    /// The commit is exactly at this tag
    Tag(String),
    /// The most recently observed branch, carried forward from newer commits
    Branch(String),
}

impl CommitRef {
    /// Ref name, without the `refs/...` prefix
    pub fn name(&self) -> &str {
        match self {
            Self::Tag(name) | Self::Branch(name) => name,
        }
    }

    /// Tag name, if this commit is tagged
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Tag(name) => Some(name),
            Self::Branch(_) => None,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }
}

/// A single commit parsed from the log export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Tag at this commit, or the sticky branch name
    pub reference: CommitRef,
    /// Abbreviated commit hash
    pub short_hash: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
    /// Subject line
    pub subject: String,
}

/// A run of commits rendered under one release heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogSection {
    /// Tag or branch name
    pub heading: String,
    /// Date of the commit that opened the section
    pub date: NaiveDate,
    /// Commit subjects, newest first
    pub entries: Vec<String>,
}

impl ChangelogSection {
    /// Create an empty section
    pub fn new(heading: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            heading: heading.into(),
            date,
            entries: Vec::new(),
        }
    }

    /// Add an entry to the section
    pub fn push(&mut self, subject: impl Into<String>) {
        self.entries.push(subject.into());
    }

    /// Date in the `YYYY/MM/DD` form used in headings
    pub fn date_label(&self) -> String {
        self.date.format("%Y/%m/%d").to_string()
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
