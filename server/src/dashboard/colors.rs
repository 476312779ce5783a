use crate::dashboard::errors::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Accent colors of the dashboard, stored as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent_green: String,
    pub accent_red: String,
    pub accent_orange: String,
    pub accent_yellow: String,
    pub accent_purple: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#8b5cf6".to_string(),
            accent_green: "#10b981".to_string(),
            accent_red: "#ef4444".to_string(),
            accent_orange: "#f97316".to_string(),
            accent_yellow: "#eab308".to_string(),
            accent_purple: "#a855f7".to_string(),
        }
    }
}

impl ColorPalette {
    fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent_green", self.accent_green.as_str()),
            ("accent_red", self.accent_red.as_str()),
            ("accent_orange", self.accent_orange.as_str()),
            ("accent_yellow", self.accent_yellow.as_str()),
            ("accent_purple", self.accent_purple.as_str()),
        ]
    }

    /// Check that every color is a `#rrggbb` hex triplet.
    pub fn validate(&self) -> DashboardResult<()> {
        for (field, value) in self.fields() {
            if parse_hex_color(value).is_err() {
                return Err(DashboardError::InvalidColor {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Parse `#rrggbb` into its components.
pub fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), &'static str> {
    let hex = hex.strip_prefix('#').ok_or("Missing '#' prefix")?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err("Invalid hex color format");
    }

    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid red component")?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid green component")?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid blue component")?;

    Ok((r, g, b))
}

/// JSON file holding the current [`ColorPalette`].
#[derive(Debug, Clone)]
pub struct ColorStore {
    path: PathBuf,
}

impl ColorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current palette; the default palette until one has been saved.
    pub fn load(&self) -> DashboardResult<ColorPalette> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ColorPalette::default()),
            Err(e) => {
                return Err(DashboardError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        serde_json::from_slice(&data).map_err(|e| DashboardError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Validate and persist a palette as indented JSON.
    pub fn save(&self, palette: &ColorPalette) -> DashboardResult<()> {
        palette.validate()?;

        let data = serde_json::to_vec_pretty(palette).map_err(DashboardError::Serialize)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| DashboardError::DirCreate {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(&self.path, data).map_err(|e| DashboardError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        log::info!("Saved color palette to '{}'", self.path.display());
        Ok(())
    }
}
