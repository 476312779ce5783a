use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the background image and color palette stores.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Failed to create directory '{}': {source}", .path.display())]
    DirCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse colors file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize colors: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid image filename: '{0}'")]
    InvalidFilename(String),

    #[error("Image not found: '{0}'")]
    ImageNotFound(String),

    #[error("Invalid color for '{field}': '{value}' (expected #rrggbb)")]
    InvalidColor { field: &'static str, value: String },
}

impl DashboardError {
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::DirCreate { .. } | DashboardError::Write { .. } => {
                "Failed to save file".to_string()
            }
            DashboardError::Read { .. } => "Failed to read colors".to_string(),
            DashboardError::Parse { .. } => "Failed to parse colors".to_string(),
            DashboardError::Serialize(_) => "Failed to marshal colors".to_string(),
            DashboardError::InvalidFilename(_) => "Invalid filename".to_string(),
            DashboardError::ImageNotFound(_) => "Image not found".to_string(),
            DashboardError::InvalidColor { field, value } => {
                format!("Invalid color for '{field}': '{value}' (expected #rrggbb)")
            }
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
