//! Store types

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::Result;

/// Release channel of an uploaded file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// Stable release
    #[default]
    #[serde(rename = "r")]
    Release,
    /// Beta build
    #[serde(rename = "b")]
    Beta,
    /// Alpha build
    #[serde(rename = "a")]
    Alpha,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Beta => "beta",
            Self::Alpha => "alpha",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FileKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "release" | "r" => Ok(Self::Release),
            "beta" | "b" => Ok(Self::Beta),
            "alpha" | "a" => Ok(Self::Alpha),
            _ => Err(format!("Unknown file kind: {}", s)),
        }
    }
}

/// Markup language of the changelog and caveats text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupFormat {
    #[default]
    Plain,
    Markdown,
    #[serde(rename = "bbcode")]
    BBCode,
    Html,
    #[serde(rename = "creole")]
    WikiCreole,
}

impl MarkupFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markdown => "markdown",
            Self::BBCode => "bbcode",
            Self::Html => "html",
            Self::WikiCreole => "creole",
        }
    }
}

impl std::fmt::Display for MarkupFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata sent alongside an uploaded file
///
/// Field names are the form field names the upload endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseFileMetadata {
    /// Display name of the file
    pub name: String,
    /// Target game version id; resolved to the latest version when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_versions: Option<String>,
    /// Release channel
    pub file_type: FileKind,
    /// Changelog text
    pub change_log: String,
    /// Markup of `change_log`
    pub change_markup_type: MarkupFormat,
    /// Known caveats text
    pub known_caveats: String,
    /// Markup of `known_caveats`
    pub caveats_markup_type: MarkupFormat,
}

impl ReleaseFileMetadata {
    /// Create metadata with an empty plain-text changelog and no caveats
    pub fn new(name: impl Into<String>, file_type: FileKind) -> Self {
        Self {
            name: name.into(),
            game_versions: None,
            file_type,
            change_log: String::new(),
            change_markup_type: MarkupFormat::Plain,
            known_caveats: String::new(),
            caveats_markup_type: MarkupFormat::Plain,
        }
    }

    /// Set the target game version id
    pub fn with_game_version(mut self, id: impl Into<String>) -> Self {
        self.game_versions = Some(id.into());
        self
    }

    /// Set the changelog
    pub fn with_changelog(mut self, text: impl Into<String>, markup: MarkupFormat) -> Self {
        self.change_log = text.into();
        self.change_markup_type = markup;
        self
    }

    /// Set the known caveats
    pub fn with_caveats(mut self, text: impl Into<String>, markup: MarkupFormat) -> Self {
        self.known_caveats = text.into();
        self.caveats_markup_type = markup;
        self
    }

    /// Flatten into form field name -> value
    ///
    /// Non-string values are stringified; unset optional fields are omitted.
    pub fn form_fields(&self) -> Result<BTreeMap<String, String>> {
        let serde_json::Value::Object(map) = serde_json::to_value(self)? else {
            return Ok(BTreeMap::new());
        };

        Ok(map
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| match value {
                serde_json::Value::String(s) => (key, s),
                other => (key, other.to_string()),
            })
            .collect())
    }
}

/// A game version the service knows about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameVersion {
    #[serde(default)]
    pub breaks_compatibility: bool,
    #[serde(default, deserialize_with = "string_or_number")]
    pub internal_id: Option<String>,
    #[serde(default)]
    pub is_development: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Game versions keyed by their numeric id
pub type GameVersions = HashMap<String, GameVersion>;

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Per-field messages from a rejected upload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Messages for one field
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Fields with their messages, sorted by field name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Vec<String>>> for ValidationErrors {
    fn from(fields: BTreeMap<String, Vec<String>>) -> Self {
        Self(fields)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        f.write_str(&joined.join("; "))
    }
}

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Game version id the file was filed under
    pub game_version: String,
    /// Uploaded file name
    pub file_name: String,
}
