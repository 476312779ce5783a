use super::{LoggingConfig, limits::*, validation::ConfigValidationError};
use serde::Deserialize;
use server::community::CommunityConfig;
use server::dashboard::image::DEFAULT_MAX_IMAGE_BYTES;
use server::theme::validation::DEFAULT_MAX_THEME_BYTES;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    server: ServerConfig,
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    limits: LimitsConfig,
    #[serde(default)]
    cors: CorsConfig,
    #[serde(default)]
    community: CommunitySettings,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if self.server.port() == 0 {
            errors.push(ConfigValidationError::Port {
                configured: self.server.port(),
            });
        }

        let theme_bytes = self.limits.max_theme_bytes();
        if !(1..=MAX_THEME_UPLOAD_BYTES).contains(&theme_bytes) {
            errors.push(ConfigValidationError::ThemeUploadLimit {
                configured: theme_bytes,
                limit: MAX_THEME_UPLOAD_BYTES,
            });
        }

        let image_bytes = self.limits.max_image_bytes();
        if !(1..=MAX_IMAGE_UPLOAD_BYTES).contains(&image_bytes) {
            errors.push(ConfigValidationError::ImageUploadLimit {
                configured: image_bytes,
                limit: MAX_IMAGE_UPLOAD_BYTES,
            });
        }

        let timeout = self.community.timeout_secs();
        if !(MIN_COMMUNITY_TIMEOUT_SECS..=MAX_COMMUNITY_TIMEOUT_SECS).contains(&timeout) {
            errors.push(ConfigValidationError::CommunityTimeout {
                configured: timeout,
                min_limit: MIN_COMMUNITY_TIMEOUT_SECS,
                max_limit: MAX_COMMUNITY_TIMEOUT_SECS,
            });
        }

        if self.cors.max_age_secs() > MAX_CORS_MAX_AGE_SECS {
            errors.push(ConfigValidationError::CorsMaxAge {
                configured: self.cors.max_age_secs(),
                limit: MAX_CORS_MAX_AGE_SECS,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Apply command line overrides on top of file and environment values
    pub fn apply_overrides(&mut self, port: Option<u16>, storage_root: Option<PathBuf>) {
        if let Some(port) = port {
            self.server.port = Some(port);
        }
        if let Some(root) = storage_root {
            self.storage.root = Some(root);
        }
    }

    // Configuration section accessors
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    pub fn cors(&self) -> &CorsConfig {
        &self.cors
    }

    pub fn community(&self) -> &CommunitySettings {
        &self.community
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// Listening address
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    host: Option<String>,
    port: Option<u16>,
}

impl ServerConfig {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or("0.0.0.0")
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(8080)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}

/// On-disk locations. Relative image and color paths are resolved against
/// the storage root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    root: Option<PathBuf>,
    image_dir: Option<PathBuf>,
    colors_file: Option<PathBuf>,
}

impl StorageConfig {
    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("."))
    }

    pub fn image_dir(&self) -> PathBuf {
        self.root()
            .join(self.image_dir.as_deref().unwrap_or(Path::new("uploads")))
    }

    pub fn colors_file(&self) -> PathBuf {
        self.root()
            .join(self.colors_file.as_deref().unwrap_or(Path::new("colors.json")))
    }
}

/// Upload size limits in bytes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitsConfig {
    max_theme_bytes: Option<usize>,
    max_image_bytes: Option<usize>,
}

impl LimitsConfig {
    pub fn max_theme_bytes(&self) -> usize {
        self.max_theme_bytes.unwrap_or(DEFAULT_MAX_THEME_BYTES)
    }

    pub fn max_image_bytes(&self) -> usize {
        self.max_image_bytes.unwrap_or(DEFAULT_MAX_IMAGE_BYTES)
    }
}

/// Cross-origin settings for the dashboard frontend
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    allowed_origins: Option<Vec<String>>,
    max_age_secs: Option<u64>,
}

impl CorsConfig {
    pub fn allowed_origins(&self) -> Vec<String> {
        self.allowed_origins.clone().unwrap_or_else(|| {
            vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
                "*".to_string(),
            ]
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins().iter().any(|origin| origin == "*")
    }

    pub fn max_age_secs(&self) -> u64 {
        self.max_age_secs.unwrap_or(300)
    }

    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_secs())
    }
}

/// Community theme registry location
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommunitySettings {
    api_base: Option<String>,
    owner: Option<String>,
    repo: Option<String>,
    themes_path: Option<String>,
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
}

impl CommunitySettings {
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(10)
    }

    /// Client configuration, with an optional token supplied from the environment
    pub fn client_config(&self, token: Option<String>) -> CommunityConfig {
        let defaults = CommunityConfig::default();
        CommunityConfig {
            api_base: self.api_base.clone().unwrap_or(defaults.api_base),
            owner: self.owner.clone().unwrap_or(defaults.owner),
            repo: self.repo.clone().unwrap_or(defaults.repo),
            themes_path: self.themes_path.clone().unwrap_or(defaults.themes_path),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            timeout: Duration::from_secs(self.timeout_secs()),
            token,
        }
    }
}
