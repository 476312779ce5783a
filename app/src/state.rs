use crate::config::AppConfig;
use server::common::HttpError;
use server::community::CommunityClient;
use server::dashboard::{ColorStore, DashboardError, ImageStore};
use server::theme::ThemeService;
use server::utils::env::EnvUtils;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Environment variable holding an optional GitHub token for the community registry
pub const GITHUB_TOKEN_VAR: &str = "VIGILANCE_GITHUB_TOKEN";

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Failed to prepare image storage: {0}")]
    Images(#[from] DashboardError),

    #[error("Failed to create community registry client: {0}")]
    Community(#[from] HttpError),
}

/// Upload size limits applied by the handlers, in bytes.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_theme_bytes: usize,
    pub max_image_bytes: usize,
}

/// Shared state handed to every handler.
///
/// Built once at startup; the stores behind it hold their own locks where
/// they keep anything in memory.
#[derive(Clone)]
pub struct AppState {
    pub themes: Arc<ThemeService>,
    pub images: Arc<ImageStore>,
    pub colors: Arc<ColorStore>,
    pub community: Arc<CommunityClient>,
    pub limits: UploadLimits,
    pub started_at: Instant,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, StateError> {
        let storage = config.storage();
        let token = EnvUtils::get_optional_var(GITHUB_TOKEN_VAR);
        if token.is_some() {
            log::info!("Using {GITHUB_TOKEN_VAR} for community registry requests");
        }

        Ok(Self {
            themes: Arc::new(ThemeService::new(storage.root())),
            images: Arc::new(ImageStore::new(storage.image_dir())?),
            colors: Arc::new(ColorStore::new(storage.colors_file())),
            community: Arc::new(CommunityClient::new(
                config.community().client_config(token),
            )?),
            limits: UploadLimits {
                max_theme_bytes: config.limits().max_theme_bytes(),
                max_image_bytes: config.limits().max_image_bytes(),
            },
            started_at: Instant::now(),
        })
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
