//! Snapshot archives of HEAD

use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use chrono::{Datelike, TimeZone, Timelike, Utc};
use git2::{AttrCheckFlags, AttrValue, ObjectType, Tree};
use globset::GlobSet;
use tracing::{debug, info, instrument};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::repository::{GitRepo, Result};
use addonship_core::error::GitError;

const MODE_EXECUTABLE: i32 = 0o100755;
const MODE_SYMLINK: i32 = 0o120000;
const MODE_SUBMODULE: i32 = 0o160000;

/// Attribute that keeps a path out of archives
const EXPORT_IGNORE: &str = "export-ignore";

impl GitRepo {
    /// Zip the HEAD tree into an anonymous temp file, every entry under `prefix`
    ///
    /// Mirrors `git archive --format=zip --worktree-attributes`: executable
    /// bits and symlinks are kept, submodules and `export-ignore` paths are
    /// skipped. Paths matching `ignore` are skipped as well. Entries carry
    /// the HEAD commit time. The file is rewound before it is returned.
    #[instrument(skip(self, ignore), fields(path = %self.path().display()))]
    pub fn snapshot_archive(&self, prefix: &str, ignore: &GlobSet) -> Result<File> {
        let head = self.head_commit()?;
        let tree = head.tree()?;

        let time = Utc
            .timestamp_opt(head.time().seconds(), 0)
            .single()
            .and_then(|t| {
                zip::DateTime::from_date_and_time(
                    t.year() as u16,
                    t.month() as u8,
                    t.day() as u8,
                    t.hour() as u8,
                    t.minute() as u8,
                    t.second() as u8,
                )
                .ok()
            })
            .unwrap_or_default();

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(time);

        let mut zip = ZipWriter::new(tempfile::tempfile()?);
        if !prefix.is_empty() {
            zip.add_directory(prefix, options).map_err(archive_error)?;
        }

        let mut writer = ArchiveWriter {
            repo: self,
            zip,
            ignore,
            prefix,
            options,
            entries: 0,
        };
        writer.add_tree(&tree, "")?;

        let entries = writer.entries;
        let mut file = writer.zip.finish().map_err(archive_error)?;
        file.seek(SeekFrom::Start(0))?;

        info!(entries, prefix, "snapshot archive built");
        Ok(file)
    }

    fn is_export_ignored(&self, path: &str) -> Result<bool> {
        let value = self
            .repo
            .get_attr(Path::new(path), EXPORT_IGNORE, AttrCheckFlags::FILE_THEN_INDEX)?;
        Ok(matches!(AttrValue::from_string(value), AttrValue::True))
    }
}

struct ArchiveWriter<'a> {
    repo: &'a GitRepo,
    zip: ZipWriter<File>,
    ignore: &'a GlobSet,
    prefix: &'a str,
    options: SimpleFileOptions,
    entries: usize,
}

impl ArchiveWriter<'_> {
    fn add_tree(&mut self, tree: &Tree<'_>, dir: &str) -> Result<()> {
        for entry in tree.iter() {
            let Some(name) = entry.name() else {
                debug!(dir, "skipping entry with non-UTF-8 name");
                continue;
            };
            let path = format!("{}{}", dir, name);

            if self.ignore.is_match(&path) || self.repo.is_export_ignored(&path)? {
                debug!(path = %path, "ignored");
                continue;
            }

            let archive_path = format!("{}{}", self.prefix, path);
            let mode = entry.filemode();

            match entry.kind() {
                Some(ObjectType::Tree) => {
                    let subtree = self.repo.repo.find_tree(entry.id())?;
                    self.zip
                        .add_directory(format!("{}/", archive_path), self.options)
                        .map_err(archive_error)?;
                    self.add_tree(&subtree, &format!("{}/", path))?;
                }
                Some(ObjectType::Blob) => {
                    let blob = self.repo.repo.find_blob(entry.id())?;
                    if mode == MODE_SYMLINK {
                        let target = String::from_utf8_lossy(blob.content()).into_owned();
                        self.zip
                            .add_symlink(archive_path, target, self.options)
                            .map_err(archive_error)?;
                    } else {
                        let permissions = if mode == MODE_EXECUTABLE { 0o755 } else { 0o644 };
                        self.zip
                            .start_file(archive_path, self.options.unix_permissions(permissions))
                            .map_err(archive_error)?;
                        self.zip.write_all(blob.content())?;
                    }
                    self.entries += 1;
                }
                _ if mode == MODE_SUBMODULE => {
                    debug!(path = %path, "skipping submodule");
                }
                _ => {
                    debug!(path = %path, "skipping unsupported entry");
                }
            }
        }
        Ok(())
    }
}

fn archive_error(e: zip::result::ZipError) -> GitError {
    GitError::Archive(e.to_string())
}
