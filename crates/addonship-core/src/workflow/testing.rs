//! In-memory fakes for workflow tests

use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::sync::Mutex;

use addonship_changelog::parser::write_record;
use addonship_stores::{
    GameVersions, Payload, ReleaseFileMetadata, ReleaseStore, StoreError, UploadReceipt,
};
use globset::GlobSet;
use tokio::io::AsyncReadExt;

use crate::error::{GitError, Result};
use crate::vcs::VcsProvider;

pub const ARCHIVE_BYTES: &[u8] = b"PK\x05\x06fake-archive";

#[derive(Default)]
pub struct FakeVcs {
    pub not_a_repository: bool,
    pub log: String,
    pub tag: Option<String>,
    pub archive_prefix: Mutex<Option<String>>,
}

impl FakeVcs {
    /// Repository whose history is `(decoration, epoch, subject)`, newest first
    pub fn with_log(commits: &[(&str, i64, &str)]) -> Self {
        let mut log = String::new();
        for (i, (decoration, epoch, subject)) in commits.iter().enumerate() {
            write_record(&mut log, decoration, &format!("abc{:04}", i), *epoch, subject);
        }
        Self::with_raw_log(&log)
    }

    pub fn with_raw_log(log: &str) -> Self {
        Self {
            log: log.to_string(),
            tag: Some("v1.0".to_string()),
            ..Default::default()
        }
    }
}

impl VcsProvider for FakeVcs {
    fn is_repository(&self) -> bool {
        !self.not_a_repository
    }

    fn export_commit_log(&self) -> Result<String> {
        Ok(self.log.clone())
    }

    fn latest_tag_name(&self) -> Result<String> {
        self.tag
            .clone()
            .ok_or_else(|| GitError::NoTags("HEAD".to_string()).into())
    }

    fn build_snapshot_archive(&self, prefix: &str, _ignore: &GlobSet) -> Result<File> {
        *self.archive_prefix.lock().unwrap() = Some(prefix.to_string());
        let mut file = tempfile::tempfile()?;
        file.write_all(ARCHIVE_BYTES)?;
        file.seek(SeekFrom::Start(0))?;
        Ok(file)
    }
}

/// One recorded upload
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub metadata: ReleaseFileMetadata,
    pub slug: String,
    pub file_name: String,
    pub payload: Vec<u8>,
}

/// Store that records every call and answers with a fixed outcome
#[derive(Default)]
pub struct RecordingStore {
    pub calls: Mutex<Vec<&'static str>>,
    pub uploads: Mutex<Vec<RecordedUpload>>,
    pub reject: Option<StoreError>,
}

impl RecordingStore {
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ReleaseStore for RecordingStore {
    fn name(&self) -> &str {
        "recording"
    }

    async fn game_versions(&self) -> addonship_stores::Result<GameVersions> {
        self.calls.lock().unwrap().push("game_versions");
        Ok(GameVersions::new())
    }

    async fn latest_game_version_id(&self) -> addonship_stores::Result<String> {
        self.calls.lock().unwrap().push("latest_game_version_id");
        Ok("15".to_string())
    }

    async fn upload_file(
        &self,
        mut metadata: ReleaseFileMetadata,
        slug: &str,
        file_name: &str,
        mut payload: Payload,
    ) -> addonship_stores::Result<UploadReceipt> {
        self.calls.lock().unwrap().push("upload_file");

        if let Some(err) = &self.reject {
            return Err(match err {
                StoreError::Remote {
                    operation,
                    status,
                    body,
                } => StoreError::Remote {
                    operation: *operation,
                    status: *status,
                    body: body.clone(),
                },
                StoreError::Validation(errors) => StoreError::Validation(errors.clone()),
                other => StoreError::Format(other.to_string()),
            });
        }

        let mut bytes = Vec::new();
        payload.read_to_end(&mut bytes).await.unwrap();

        let game_version = metadata
            .game_versions
            .get_or_insert_with(|| "15".to_string())
            .clone();

        self.uploads.lock().unwrap().push(RecordedUpload {
            metadata,
            slug: slug.to_string(),
            file_name: file_name.to_string(),
            payload: bytes,
        });

        Ok(UploadReceipt {
            game_version,
            file_name: file_name.to_string(),
        })
    }
}
