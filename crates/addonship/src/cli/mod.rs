//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::Parser;

use commands::{PublishCommand, ShowChangelogCommand};

/// addonship - package a git-tracked addon and publish it to CurseForge
#[derive(Debug, Parser)]
#[command(name = "addonship")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub publish: PublishCommand,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        if self.publish.show_changelog {
            let command = ShowChangelogCommand {
                style: self.publish.changelog_format.into(),
            };
            return command.execute(self);
        }

        self.publish.execute(self)
    }
}
