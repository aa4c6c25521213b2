//! Publish command

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::info;

use addonship_changelog::ChangelogStyle;
use addonship_core::config::load_pkgmeta_or_default;
use addonship_core::{AddonshipError, PublishOptions, PublishWorkflow};
use addonship_git::GitVcs;
use addonship_stores::{CurseForgeClient, CurseForgeConfig, FileKind};

use crate::cli::{output, Cli};

/// Package HEAD and upload it as a new file
#[derive(Debug, Args)]
pub struct PublishCommand {
    /// Your CurseForge API key
    #[arg(
        short = 'a',
        long,
        env = "CURSEFORGE_API_KEY",
        hide_env_values = true,
        required_unless_present = "show_changelog"
    )]
    pub api_key: Option<String>,

    /// The game in lower case (e.g. wow, war, rom)
    #[arg(short, long, required_unless_present = "show_changelog")]
    pub game: Option<String>,

    /// Your addon's slug name
    #[arg(short, long, required_unless_present = "show_changelog")]
    pub slug: Option<String>,

    /// Upload as a release (default)
    #[arg(long, conflicts_with_all = ["beta", "alpha"])]
    pub release: bool,

    /// Upload as a beta
    #[arg(long, conflicts_with = "alpha")]
    pub beta: bool,

    /// Upload as an alpha
    #[arg(long)]
    pub alpha: bool,

    /// Display the changelog and exit
    #[arg(long)]
    pub show_changelog: bool,

    /// Game version id to file the upload under (default: latest)
    #[arg(long, value_name = "ID")]
    pub game_version: Option<String>,

    /// Changelog output format
    #[arg(long, value_enum, default_value = "plain")]
    pub changelog_format: ChangelogFormatArg,

    /// API root override
    #[arg(long, env = "CURSEFORGE_API_URL", hide = true)]
    pub api_url: Option<String>,
}

/// Changelog format argument
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ChangelogFormatArg {
    /// Underlined headings with ` * ` bullets
    #[default]
    Plain,
    /// Markdown headings and lists
    Markdown,
}

impl From<ChangelogFormatArg> for ChangelogStyle {
    fn from(arg: ChangelogFormatArg) -> Self {
        match arg {
            ChangelogFormatArg::Plain => ChangelogStyle::Plain,
            ChangelogFormatArg::Markdown => ChangelogStyle::Markdown,
        }
    }
}

impl PublishCommand {
    /// Release channel selected by the flags
    pub fn file_kind(&self) -> FileKind {
        match (self.beta, self.alpha) {
            (true, _) => FileKind::Beta,
            (_, true) => FileKind::Alpha,
            _ => FileKind::Release,
        }
    }

    /// Execute the publish command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let api_key = self.api_key.as_deref().context("--api-key is required")?;
        let game = self.game.as_deref().context("--game is required")?;
        let slug = self.slug.as_deref().context("--slug is required")?;
        info!(game, slug, file_kind = %self.file_kind(), "executing publish command");

        let cwd = std::env::current_dir()?;
        let (meta, meta_path) = load_pkgmeta_or_default(&cwd)?;
        if let (Some(path), true) = (&meta_path, cli.verbose) {
            output::info(&format!(
                "Using {}",
                output::path_style().apply_to(path.display())
            ));
        }

        let vcs = GitVcs::discover(&cwd);

        let mut config = CurseForgeConfig::new(game, api_key);
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url);
        }
        let client = CurseForgeClient::new(config).map_err(AddonshipError::from)?;

        let mut options = PublishOptions::new(&cwd, slug)
            .with_file_kind(self.file_kind())
            .with_changelog_style(self.changelog_format.into());
        if let Some(id) = &self.game_version {
            options = options.with_game_version(id);
        }

        if !cli.quiet {
            output::info(&format!(
                "Publishing {} ({}) to {}",
                style(slug).bold(),
                self.file_kind(),
                game
            ));
        }

        let runtime = tokio::runtime::Runtime::new()?;
        let workflow = PublishWorkflow::new(&vcs, &client, &meta, options);
        let result = runtime.block_on(workflow.execute())?;

        if !cli.quiet {
            output::success(&format!("Uploaded {}", style(&result.file_name).bold()));
            println!(
                "{}",
                output::key_value("Tag", &output::tag_style().apply_to(&result.tag).to_string())
            );
            println!("{}", output::key_value("Game version", &result.game_version));
            println!("{}", output::key_value("Channel", self.file_kind().as_str()));
        }

        Ok(())
    }
}
