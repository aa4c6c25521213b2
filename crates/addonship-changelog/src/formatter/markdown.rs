//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::{ChangelogFormatter, ChangelogStyle};
use crate::types::ChangelogSection;

/// Markdown changelog formatter
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormatter;

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, sections), fields(section_count = sections.len()))]
    fn format(&self, sections: &[ChangelogSection]) -> String {
        let mut output = String::new();

        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&format!("## {} / {}\n\n", section.heading, section.date_label()));
            for entry in &section.entries {
                output.push_str(&format!("- {}\n", entry));
            }
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn style(&self) -> ChangelogStyle {
        ChangelogStyle::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_basic() {
        let mut section =
            ChangelogSection::new("main", NaiveDate::from_ymd_opt(2023, 12, 24).unwrap());
        section.push("Add options panel");
        let mut tagged =
            ChangelogSection::new("v0.3", NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        tagged.push("Localize strings");

        let output = MarkdownFormatter.format(&[section, tagged]);

        assert_eq!(
            output,
            concat!(
                "## main / 2023/12/24\n\n- Add options panel\n\n",
                "## v0.3 / 2023/12/01\n\n- Localize strings\n",
            )
        );
    }
}
