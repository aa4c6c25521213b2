//! Grouping of commit records into release sections

use tracing::debug;

use crate::types::{ChangelogSection, CommitRecord};

/// Group records, newest first, into non-overlapping sections
///
/// A section opens at the first record and at every record whose tag differs
/// from the tag of the section before it. Every record, including the one
/// that opened a section, contributes one entry.
pub fn build_sections(records: &[CommitRecord]) -> Vec<ChangelogSection> {
    let mut sections: Vec<ChangelogSection> = Vec::new();
    let mut last_tag: Option<&str> = None;

    for record in records {
        let tag = record.reference.tag();
        let opens_section =
            sections.is_empty() || matches!(tag, Some(tag) if last_tag != Some(tag));

        if opens_section {
            sections.push(ChangelogSection::new(
                record.reference.name(),
                record.timestamp.date_naive(),
            ));
            last_tag = tag;
        }

        if let Some(section) = sections.last_mut() {
            section.push(record.subject.as_str());
        }
    }

    debug!(
        commit_count = records.len(),
        section_count = sections.len(),
        "changelog sections built"
    );
    sections
}
