//! Changelog workflow operations

use std::path::Path;

use addonship_changelog::{ChangelogBuilder, ChangelogStyle};
use addonship_stores::MarkupFormat;
use tracing::{debug, info, instrument};

use crate::config::PkgMeta;
use crate::error::{ConfigError, Result};
use crate::vcs::VcsProvider;

/// Changelog text together with the markup it is written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogText {
    pub text: String,
    pub markup: MarkupFormat,
}

/// Markup type announced to the release service for a rendered style
pub fn markup_for_style(style: ChangelogStyle) -> MarkupFormat {
    match style {
        ChangelogStyle::Plain => MarkupFormat::Plain,
        ChangelogStyle::Markdown => MarkupFormat::Markdown,
    }
}

/// Produce the changelog for the current project
///
/// Reads the `manual-changelog` file (relative to `root`) when the pkgmeta
/// names one, otherwise renders the commit history of HEAD.
#[instrument(skip(vcs, meta), fields(root = %root.display()))]
pub fn changelog_text(
    vcs: &dyn VcsProvider,
    meta: &PkgMeta,
    root: &Path,
    style: ChangelogStyle,
) -> Result<ChangelogText> {
    if let Some(manual) = &meta.manual_changelog {
        let path = root.join(manual.path());
        info!(path = %path.display(), "using manual changelog");
        let text = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::ManualChangelog { path, source })?;
        return Ok(ChangelogText {
            text,
            markup: manual.markup(),
        });
    }

    let raw = vcs.export_commit_log()?;
    debug!(raw_len = raw.len(), "exported commit log");

    let text = ChangelogBuilder::for_style(style).build(&raw)?;
    Ok(ChangelogText {
        text,
        markup: markup_for_style(style),
    })
}
