//! Commit log parsing
//!
//! Parses the output of
//! `git log --decorate=full --format='|||%d|||%h|||%ct|||%s|||__END__'`
//! into [`CommitRecord`]s, in log order.

pub mod decoration;

use chrono::{TimeZone, Utc};
use tracing::{debug, instrument};

use crate::error::{ChangelogError, Result};
use crate::types::{CommitRecord, CommitRef};

/// Separator between the fields of one record
pub const FIELD_DELIMITER: &str = "|||";

/// Marker closing every record
pub const RECORD_SENTINEL: &str = "__END__";

/// `git log --format` string producing the text [`parse_commit_log`] consumes
pub const LOG_FORMAT: &str = "|||%d|||%h|||%ct|||%s|||__END__";

/// Branch assumed until the log names one
pub const DEFAULT_BRANCH: &str = "master";

/// Append one record in the log export format
pub fn write_record(
    out: &mut String,
    decoration: &str,
    short_hash: &str,
    epoch: i64,
    subject: &str,
) {
    out.push_str(&format!(
        "{d}{decoration}{d}{short_hash}{d}{epoch}{d}{subject}{d}{RECORD_SENTINEL}\n",
        d = FIELD_DELIMITER
    ));
}

/// Parse a full log export
///
/// Empty records are skipped. Any malformed record fails the whole parse.
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn parse_commit_log(raw: &str) -> Result<Vec<CommitRecord>> {
    let (cursor, records) = raw
        .split(RECORD_SENTINEL)
        .map(|chunk| chunk.trim_start_matches(|c: char| c == '\r' || c == '\n'))
        .filter(|chunk| !chunk.trim().is_empty())
        .enumerate()
        .try_fold(
            (LogCursor::default(), Vec::new()),
            |(cursor, mut records), (index, chunk)| {
                let fields = RawRecord::split(index + 1, chunk)?;
                let (cursor, record) = cursor.advance(index + 1, fields)?;
                records.push(record);
                Ok::<_, ChangelogError>((cursor, records))
            },
        )?;

    debug!(
        count = records.len(),
        last_branch = %cursor.branch,
        "parsed commit log"
    );
    Ok(records)
}

/// Fields of one record, still as text
struct RawRecord<'a> {
    decoration: &'a str,
    short_hash: &'a str,
    timestamp: &'a str,
    subject: &'a str,
}

impl<'a> RawRecord<'a> {
    fn split(index: usize, chunk: &'a str) -> Result<Self> {
        let body = chunk.trim_end_matches(|c: char| c == '\r' || c == '\n');
        let body = body.strip_prefix(FIELD_DELIMITER).ok_or_else(|| {
            ChangelogError::parse(index, format!("record does not start with '{FIELD_DELIMITER}'"))
        })?;
        let body = body.strip_suffix(FIELD_DELIMITER).unwrap_or(body);

        let fields: Vec<&str> = body.splitn(4, FIELD_DELIMITER).collect();
        match fields[..] {
            [decoration, short_hash, timestamp, subject] => Ok(Self {
                decoration,
                short_hash,
                timestamp,
                subject,
            }),
            _ => Err(ChangelogError::parse(
                index,
                format!("expected 4 fields, found {}", fields.len()),
            )),
        }
    }
}

/// State threaded through the fold over records
///
/// Decorations only appear on commits sitting exactly at a ref tip, so the
/// last branch seen applies to every older commit until another one shows up.
#[derive(Debug)]
struct LogCursor {
    branch: String,
}

impl Default for LogCursor {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl LogCursor {
    fn advance(self, index: usize, raw: RawRecord<'_>) -> Result<(Self, CommitRecord)> {
        let seconds: i64 = raw.timestamp.trim().parse().map_err(|e| {
            ChangelogError::parse(index, format!("invalid timestamp '{}': {}", raw.timestamp, e))
        })?;
        let timestamp = Utc.timestamp_opt(seconds, 0).single().ok_or_else(|| {
            ChangelogError::parse(index, format!("timestamp {} out of range", seconds))
        })?;

        let branch = decoration::branch_ref(raw.decoration)
            .map(str::to_string)
            .unwrap_or(self.branch);

        let reference = match decoration::tag_ref(raw.decoration) {
            Some(tag) => CommitRef::Tag(tag.to_string()),
            None => CommitRef::Branch(branch.clone()),
        };

        let record = CommitRecord {
            reference,
            short_hash: raw.short_hash.trim().to_string(),
            timestamp,
            subject: raw.subject.to_string(),
        };

        Ok((Self { branch }, record))
    }
}
