//! Changelog generation

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::formatter::{ChangelogFormatter, ChangelogStyle, PlainFormatter};
use crate::parser::parse_commit_log;
use crate::renderer::build_sections;
use crate::types::ChangelogSection;

/// Builds changelog text from a raw commit log export
pub struct ChangelogBuilder {
    formatter: Box<dyn ChangelogFormatter>,
}

impl ChangelogBuilder {
    /// Create a builder with the plain formatter
    pub fn new() -> Self {
        Self {
            formatter: Box::new(PlainFormatter),
        }
    }

    /// Create a builder for the given output style
    pub fn for_style(style: ChangelogStyle) -> Self {
        Self {
            formatter: style.formatter(),
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Style of the text this builder produces
    pub fn style(&self) -> ChangelogStyle {
        self.formatter.style()
    }

    /// Parse a log export into sections
    pub fn sections(&self, raw_log: &str) -> Result<Vec<ChangelogSection>> {
        let records = parse_commit_log(raw_log)?;
        Ok(build_sections(&records))
    }

    /// Parse and format in one step
    #[instrument(skip(self, raw_log), fields(style = %self.style()))]
    pub fn build(&self, raw_log: &str) -> Result<String> {
        let sections = self.sections(raw_log)?;
        info!(section_count = sections.len(), "generating changelog");
        let output = self.formatter.format(&sections);
        debug!(output_len = output.len(), "changelog formatted");
        Ok(output)
    }
}

impl Default for ChangelogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::write_record;

    // 2024-01-15T12:00:00Z
    const BASE: i64 = 1_705_320_000;

    fn tagged_log() -> String {
        let mut log = String::new();
        write_record(
            &mut log,
            " (HEAD -> refs/heads/main, tag: refs/tags/v1.0)",
            "f00d001",
            BASE,
            "Release 1.0",
        );
        for i in 0..10 {
            let hash = format!("f00d1{:02}", i);
            let subject = format!("Change {}", i);
            write_record(&mut log, "", &hash, BASE - (i + 1) * 60, &subject);
        }
        log
    }

    #[test]
    fn test_single_tag_section() {
        let output = ChangelogBuilder::new().build(&tagged_log()).unwrap();

        assert!(output.starts_with("\nv1.0 / 2024/01/15\n=================\n\n"));
        assert_eq!(output.matches("v1.0 / ").count(), 1);
        assert_eq!(output.lines().filter(|l| l.starts_with(" * ")).count(), 11);
    }

    #[test]
    fn test_deterministic() {
        let builder = ChangelogBuilder::new();
        let log = tagged_log();
        assert_eq!(builder.build(&log).unwrap(), builder.build(&log).unwrap());
    }

    #[test]
    fn test_untagged_log_defaults_to_master() {
        let mut log = String::new();
        write_record(&mut log, "", "aaaa001", BASE, "Second");
        write_record(&mut log, "", "aaaa000", BASE - 60, "First");

        let output = ChangelogBuilder::new().build(&log).unwrap();
        assert_eq!(
            output,
            "\nmaster / 2024/01/15\n=================\n\n * Second\n * First\n"
        );
    }

    #[test]
    fn test_markdown_style() {
        let builder = ChangelogBuilder::for_style(ChangelogStyle::Markdown);
        assert_eq!(builder.style(), ChangelogStyle::Markdown);

        let output = builder.build(&tagged_log()).unwrap();
        assert!(output.starts_with("## v1.0 / 2024/01/15\n\n- Release 1.0\n"));
    }

    #[test]
    fn test_parse_error_yields_no_output() {
        let mut log = tagged_log();
        log.push_str("|||||||||not-a-number|||oops|||__END__\n");
        assert!(ChangelogBuilder::new().build(&log).is_err());
    }
}
