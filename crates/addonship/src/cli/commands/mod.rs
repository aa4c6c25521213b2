//! CLI commands

mod changelog;
mod publish;

pub use changelog::ShowChangelogCommand;
pub use publish::{ChangelogFormatArg, PublishCommand};
