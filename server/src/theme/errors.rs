use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the theme storage subsystem.
///
/// `Display` carries the operation and the on-disk path for logs. Messages
/// meant for API clients come from [`ThemeError::user_message`], which never
/// includes filesystem paths.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Theme file is missing or unreadable.
    #[error("Failed to read theme file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The per-user directory could not be created.
    #[error("Failed to create theme directory '{}': {source}", .path.display())]
    DirCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the theme file failed (permissions, disk full, ...).
    #[error("Failed to write theme file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The delete target does not exist or could not be removed.
    #[error("Failed to delete theme file '{}': {source}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The caller passed a source tag that does not resolve to local files.
    #[error("Unknown theme source: {0}")]
    UnknownSource(String),

    /// A user id or theme name that is not a single plain path component.
    #[error("Invalid {kind} '{value}': must be a single path component")]
    InvalidPathSegment { kind: &'static str, value: String },
}

impl ThemeError {
    /// Whether the underlying failure is a missing file.
    pub fn is_not_found(&self) -> bool {
        match self {
            ThemeError::Read { source, .. } | ThemeError::Delete { source, .. } => {
                source.kind() == io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ThemeError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                "Theme not found".to_string()
            }
            ThemeError::Read { .. } => "Theme could not be read".to_string(),
            ThemeError::DirCreate { .. } | ThemeError::Write { .. } => {
                "Failed to save theme".to_string()
            }
            ThemeError::Delete { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                "Theme not found".to_string()
            }
            ThemeError::Delete { .. } => "Failed to delete theme".to_string(),
            ThemeError::UnknownSource(source) => format!("Unknown theme source: {source}"),
            ThemeError::InvalidPathSegment { kind, value } => format!("Invalid {kind}: '{value}'"),
        }
    }
}

pub type ThemeResult<T> = Result<T, ThemeError>;
