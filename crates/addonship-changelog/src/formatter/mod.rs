//! Changelog formatters

mod markdown;
mod plain;

pub use markdown::MarkdownFormatter;
pub use plain::PlainFormatter;

use serde::{Deserialize, Serialize};

use crate::types::ChangelogSection;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render sections, in the given order, to text
    fn format(&self, sections: &[ChangelogSection]) -> String;

    /// Style this formatter produces
    fn style(&self) -> ChangelogStyle;
}

/// Output style of a rendered changelog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangelogStyle {
    /// Underlined headings and ` * ` bullets
    #[default]
    Plain,
    /// `##` headings and `-` bullets
    Markdown,
}

impl ChangelogStyle {
    /// Formatter producing this style
    pub fn formatter(self) -> Box<dyn ChangelogFormatter> {
        match self {
            Self::Plain => Box::new(PlainFormatter),
            Self::Markdown => Box::new(MarkdownFormatter),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markdown => "markdown",
        }
    }
}

impl std::fmt::Display for ChangelogStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChangelogStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown changelog style: {}", s)),
        }
    }
}
