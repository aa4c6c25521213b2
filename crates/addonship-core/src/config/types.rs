//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use addonship_stores::MarkupFormat;

/// Packaging metadata read from `.pkgmeta`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PkgMeta {
    /// Name the addon is packaged as, instead of the directory name
    pub package_as: Option<String>,

    /// Changelog file used instead of the commit history
    pub manual_changelog: Option<ManualChangelog>,

    /// Glob patterns excluded from the archive
    pub ignore: Vec<String>,
}

impl PkgMeta {
    /// Project name: `package-as` when set, else the directory name of `root`
    pub fn project_name(&self, root: &Path) -> Option<String> {
        match &self.package_as {
            Some(name) => Some(name.clone()),
            None => root
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
        }
    }
}

/// `manual-changelog` entry
///
/// Either a bare path or a mapping with an explicit markup type:
///
/// ```yaml
/// manual-changelog:
///   filename: CHANGES.md
///   markup-type: markdown
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ManualChangelog {
    Path(PathBuf),
    Detailed {
        filename: PathBuf,
        #[serde(default, rename = "markup-type")]
        markup_type: Option<MarkupFormat>,
    },
}

impl ManualChangelog {
    pub fn path(&self) -> &Path {
        match self {
            Self::Path(path) => path,
            Self::Detailed { filename, .. } => filename,
        }
    }

    /// Markup of the file: the explicit type, else guessed from the extension
    pub fn markup(&self) -> MarkupFormat {
        if let Self::Detailed {
            markup_type: Some(markup),
            ..
        } = self
        {
            return *markup;
        }

        match self.path().extension().and_then(|e| e.to_str()) {
            Some("md") | Some("markdown") => MarkupFormat::Markdown,
            Some("html") | Some("htm") => MarkupFormat::Html,
            _ => MarkupFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_pkgmeta() {
        let yaml = concat!(
            "package-as: MyAddon\n",
            "manual-changelog: CHANGES.txt\n",
            "ignore:\n  - README.md\n  - \"*.psd\"\n",
        );
        let meta: PkgMeta = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(meta.package_as.as_deref(), Some("MyAddon"));
        assert_eq!(
            meta.manual_changelog,
            Some(ManualChangelog::Path(PathBuf::from("CHANGES.txt")))
        );
        assert_eq!(meta.ignore, vec!["README.md", "*.psd"]);
    }

    #[test]
    fn test_parse_flow_ignore_list() {
        let meta: PkgMeta = serde_yaml::from_str("ignore: [docs, tests]").unwrap();
        assert_eq!(meta.ignore, vec!["docs", "tests"]);
        assert!(meta.package_as.is_none());
    }

    #[test]
    fn test_detailed_manual_changelog() {
        let yaml = "manual-changelog:\n  filename: CHANGES\n  markup-type: markdown\n";
        let meta: PkgMeta = serde_yaml::from_str(yaml).unwrap();
        let changelog = meta.manual_changelog.unwrap();

        assert_eq!(changelog.path(), Path::new("CHANGES"));
        assert_eq!(changelog.markup(), MarkupFormat::Markdown);
    }

    #[test]
    fn test_markup_from_extension() {
        assert_eq!(
            ManualChangelog::Path("CHANGELOG.md".into()).markup(),
            MarkupFormat::Markdown
        );
        assert_eq!(
            ManualChangelog::Path("CHANGES.txt".into()).markup(),
            MarkupFormat::Plain
        );
    }

    #[test]
    fn test_project_name() {
        let meta = PkgMeta::default();
        assert_eq!(
            meta.project_name(Path::new("/src/MyAddon")).as_deref(),
            Some("MyAddon")
        );

        let meta = PkgMeta {
            package_as: Some("Renamed".to_string()),
            ..Default::default()
        };
        assert_eq!(
            meta.project_name(Path::new("/src/MyAddon")).as_deref(),
            Some("Renamed")
        );
    }
}
