//! Changelog display

use tracing::info;

use addonship_changelog::ChangelogStyle;
use addonship_core::changelog_text;
use addonship_core::config::load_pkgmeta_or_default;
use addonship_git::GitVcs;

use crate::cli::{output, Cli};

/// Print the changelog that would be attached to an upload
#[derive(Debug, Clone, Copy)]
pub struct ShowChangelogCommand {
    pub style: ChangelogStyle,
}

impl ShowChangelogCommand {
    /// Execute the changelog display. Never touches the network.
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(style = %self.style, "showing changelog");
        let cwd = std::env::current_dir()?;
        let (meta, _) = load_pkgmeta_or_default(&cwd)?;
        let vcs = GitVcs::discover(&cwd);

        let changelog = changelog_text(&vcs, &meta, &cwd, self.style)?;
        if changelog.text.trim().is_empty() && !cli.quiet {
            output::warning("Changelog is empty");
        }

        println!("{}", changelog.text);
        Ok(())
    }
}
