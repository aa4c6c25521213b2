//! Publish workflow orchestration

use std::path::PathBuf;

use addonship_changelog::ChangelogStyle;
use addonship_stores::{FileKind, MarkupFormat, Payload, ReleaseFileMetadata, ReleaseStore};
use tracing::{debug, info, instrument};

use crate::config::{build_ignore_set, PkgMeta};
use crate::error::{GitError, Result, WorkflowError};
use crate::vcs::VcsProvider;

use super::changelog::changelog_text;

/// Options for a publish run
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Project root; its directory name is the default project name
    pub root: PathBuf,
    /// Addon slug on the release service
    pub slug: String,
    /// Release channel
    pub file_kind: FileKind,
    /// Explicit game version id; the latest known version is used otherwise
    pub game_version: Option<String>,
    /// Changelog rendering style
    pub changelog_style: ChangelogStyle,
}

impl PublishOptions {
    /// Create options for a release of `slug` from `root`
    pub fn new(root: impl Into<PathBuf>, slug: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            slug: slug.into(),
            file_kind: FileKind::Release,
            game_version: None,
            changelog_style: ChangelogStyle::Plain,
        }
    }

    /// Set the release channel
    pub fn with_file_kind(mut self, file_kind: FileKind) -> Self {
        self.file_kind = file_kind;
        self
    }

    /// Target an explicit game version
    pub fn with_game_version(mut self, id: impl Into<String>) -> Self {
        self.game_version = Some(id.into());
        self
    }

    /// Set the changelog style
    pub fn with_changelog_style(mut self, style: ChangelogStyle) -> Self {
        self.changelog_style = style;
        self
    }
}

/// Outcome of a successful publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    /// Display name of the uploaded file, `"<project> <tag>"`
    pub display_name: String,
    /// Uploaded file name
    pub file_name: String,
    /// Tag the release was named after
    pub tag: String,
    /// Game version id the file was filed under
    pub game_version: String,
}

/// Package the current HEAD and upload it as a release file
pub struct PublishWorkflow<'a> {
    vcs: &'a dyn VcsProvider,
    store: &'a dyn ReleaseStore,
    meta: &'a PkgMeta,
    options: PublishOptions,
}

impl<'a> PublishWorkflow<'a> {
    /// Create a new publish workflow
    pub fn new(
        vcs: &'a dyn VcsProvider,
        store: &'a dyn ReleaseStore,
        meta: &'a PkgMeta,
        options: PublishOptions,
    ) -> Self {
        Self {
            vcs,
            store,
            meta,
            options,
        }
    }

    /// Execute the publish
    ///
    /// Every local step (repository check, changelog, tag, archive) runs
    /// before the release service is contacted.
    #[instrument(skip(self), fields(slug = %self.options.slug, store = self.store.name()))]
    pub async fn execute(&self) -> Result<PublishResult> {
        if !self.vcs.is_repository() {
            return Err(GitError::NotARepository(self.options.root.clone()).into());
        }

        let project = self.meta.project_name(&self.options.root).ok_or_else(|| {
            WorkflowError::PreConditionFailed(format!(
                "cannot derive a project name from {}",
                self.options.root.display()
            ))
        })?;

        let changelog = changelog_text(
            self.vcs,
            self.meta,
            &self.options.root,
            self.options.changelog_style,
        )?;
        debug!(changelog_len = changelog.text.len(), markup = %changelog.markup, "changelog ready");

        let tag = self.vcs.latest_tag_name()?;
        let display_name = format!("{} {}", project, tag);
        let file_name = format!("{}.zip", display_name);

        let ignore = build_ignore_set(&self.meta.ignore)?;
        let archive = self
            .vcs
            .build_snapshot_archive(&format!("{}/", project), &ignore)?;
        let archive_len = archive.metadata()?.len();
        info!(
            file_name = %file_name,
            archive_len,
            file_kind = %self.options.file_kind,
            "archive built"
        );

        let mut metadata = ReleaseFileMetadata::new(display_name.clone(), self.options.file_kind)
            .with_changelog(changelog.text, changelog.markup)
            .with_caveats("", MarkupFormat::Plain);
        if let Some(id) = &self.options.game_version {
            metadata = metadata.with_game_version(id.clone());
        }

        let payload: Payload = Box::new(tokio::fs::File::from_std(archive));
        let receipt = self
            .store
            .upload_file(metadata, &self.options.slug, &file_name, payload)
            .await?;

        info!(
            file_name = %receipt.file_name,
            game_version = %receipt.game_version,
            "release published"
        );

        Ok(PublishResult {
            display_name,
            file_name: receipt.file_name,
            tag,
            game_version: receipt.game_version,
        })
    }
}
