//! Plain text changelog formatter

use super::{ChangelogFormatter, ChangelogStyle};
use crate::types::ChangelogSection;

/// Rule printed under every section heading
pub const HEADING_RULE: &str = "=================";

/// Plain text formatter
///
/// ```text
///
/// v1.2 / 2024/01/15
/// =================
///
///  * Fix tooltip anchoring
///  * Add minimap button
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainFormatter;

impl ChangelogFormatter for PlainFormatter {
    fn format(&self, sections: &[ChangelogSection]) -> String {
        let mut output = String::new();

        for section in sections {
            output.push_str(&format!(
                "\n{} / {}\n{}\n\n",
                section.heading,
                section.date_label(),
                HEADING_RULE
            ));
            for entry in &section.entries {
                output.push_str(&format!(" * {}\n", entry));
            }
        }

        output
    }

    fn style(&self) -> ChangelogStyle {
        ChangelogStyle::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_sections() {
        let mut newer = ChangelogSection::new("v1.1", NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        newer.push("Fix tooltip anchoring");
        newer.push("Add minimap button");
        let mut older = ChangelogSection::new("v1.0", NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
        older.push("Initial release");

        let output = PlainFormatter.format(&[newer, older]);

        assert_eq!(
            output,
            "\nv1.1 / 2024/02/01\n=================\n\n \
             * Fix tooltip anchoring\n \
             * Add minimap button\n\
             \nv1.0 / 2024/01/09\n=================\n\n \
             * Initial release\n"
        );
    }

    #[test]
    fn test_format_nothing() {
        assert_eq!(PlainFormatter.format(&[]), "");
    }
}
