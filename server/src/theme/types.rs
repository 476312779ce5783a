use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::errors::ThemeError;
use super::extract::extract_value;

/// File extension shared by every theme file on disk.
pub const THEME_EXTENSION: &str = "toml";

/// Where a theme comes from.
///
/// Community themes live in a remote registry and are never materialized
/// under the storage root, so only [`ThemeSource::Default`] and
/// [`ThemeSource::User`] resolve to files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    Default,
    Community,
    User,
}

impl ThemeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeSource::Default => "default",
            ThemeSource::Community => "community",
            ThemeSource::User => "user",
        }
    }
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeSource {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(ThemeSource::Default),
            "community" => Ok(ThemeSource::Community),
            "user" => Ok(ThemeSource::User),
            other => Err(ThemeError::UnknownSource(other.to_string())),
        }
    }
}

/// Metadata snapshot of one theme file, taken at read time.
///
/// A `Theme` is rebuilt from the file on every listing and never persisted;
/// the file is the only durable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: String,
    pub source: ThemeSource,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A theme together with the raw text of its file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeContent {
    pub theme: Theme,
    pub content: String,
}

impl Theme {
    /// Build a record from already-read file content.
    ///
    /// `theme_name` is the file stem and doubles as the display name when the
    /// content has no `name = "..."` line.
    pub fn from_content(
        content: &str,
        path: &Path,
        theme_name: &str,
        source: ThemeSource,
    ) -> Self {
        let now = Utc::now();
        let bucket = match source {
            ThemeSource::User => path
                .parent()
                .and_then(Path::file_name)
                .and_then(|name| name.to_str()),
            _ => None,
        };

        let mut name = extract_value(content, "name");
        if name.is_empty() {
            name = theme_name.to_string();
        }

        Self {
            id: Self::synthetic_id(source, bucket, theme_name),
            name,
            description: extract_value(content, "description"),
            version: extract_value(content, "version"),
            author: extract_value(content, "author"),
            source,
            path: path.to_path_buf(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Identifier derived from where the file lives, stable across reads.
    ///
    /// `bucket` is the owning user for user themes; two users may both own a
    /// `sunset` theme without colliding.
    pub fn synthetic_id(source: ThemeSource, bucket: Option<&str>, theme_name: &str) -> String {
        match bucket {
            Some(bucket) => format!("{source}_{bucket}_{theme_name}"),
            None => format!("{source}_{theme_name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_round_trips_through_str() {
        for source in [ThemeSource::Default, ThemeSource::Community, ThemeSource::User] {
            assert_eq!(source.as_str().parse::<ThemeSource>().unwrap(), source);
        }
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let err = "remote".parse::<ThemeSource>().unwrap_err();
        assert!(matches!(err, ThemeError::UnknownSource(ref s) if s == "remote"));
        assert!("Default".parse::<ThemeSource>().is_err());
    }

    #[test]
    fn test_record_falls_back_to_file_stem() {
        let path = Path::new("store/themes/default/myTheme.toml");
        let theme = Theme::from_content(
            "[colors]\nbg = \"#000\"",
            path,
            "myTheme",
            ThemeSource::Default,
        );

        assert_eq!(theme.name, "myTheme");
        assert_eq!(theme.author, "");
        assert_eq!(theme.description, "");
        assert_eq!(theme.version, "");
        assert_eq!(theme.id, "default_myTheme");
        assert_eq!(theme.created_at, theme.updated_at);
    }

    #[test]
    fn test_record_extracts_metadata() {
        let content = "[metadata]\nname = \"Dark Mode\"\ndescription = \"Low light\"\nversion = \"1.2.0\"\nauthor = \"core\"\n";
        let path = Path::new("store/themes/default/dark.toml");
        let theme = Theme::from_content(content, path, "dark", ThemeSource::Default);

        assert_eq!(theme.name, "Dark Mode");
        assert_eq!(theme.description, "Low light");
        assert_eq!(theme.version, "1.2.0");
        assert_eq!(theme.author, "core");
        assert_eq!(theme.source, ThemeSource::Default);
        assert_eq!(theme.path, path);
    }

    #[test]
    fn test_user_ids_include_owner() {
        let path = Path::new("store/uploads/alice/sunset.toml");
        let theme = Theme::from_content("", path, "sunset", ThemeSource::User);
        assert_eq!(theme.id, "user_alice_sunset");

        let again = Theme::from_content("", path, "sunset", ThemeSource::User);
        assert_eq!(theme.id, again.id);
    }

    #[test]
    fn test_theme_serializes_with_snake_case_fields() {
        let theme = Theme::from_content("", Path::new("a/b/c.toml"), "c", ThemeSource::User);
        let json = serde_json::to_value(&theme).unwrap();

        assert_eq!(json["source"], "user");
        assert_eq!(json["name"], "c");
        assert!(json.get("created_at").is_some());
        assert!(json.get("updated_at").is_some());
    }
}
