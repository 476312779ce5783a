use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid server.port: {configured}")]
    Port { configured: u16 },
    #[error("Invalid limits.max_theme_bytes: {configured} (min: 1, max: {limit})")]
    ThemeUploadLimit { configured: usize, limit: usize },
    #[error("Invalid limits.max_image_bytes: {configured} (min: 1, max: {limit})")]
    ImageUploadLimit { configured: usize, limit: usize },
    #[error("Invalid community.timeout_secs: {configured} (min: {min_limit}, max: {max_limit})")]
    CommunityTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid cors.max_age_secs: {configured} (limit: {limit})")]
    CorsMaxAge { configured: u64, limit: u64 },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::Port { configured } => {
                format!(
                    "Server port is invalid!\n\n\
                    Your configured value: {configured}\n\n\
                    Please set server.port in config.toml to a port between 1 and 65535."
                )
            }
            ConfigValidationError::ThemeUploadLimit { configured, limit } => {
                format!(
                    "Theme upload limit out of range!\n\n\
                    Your configured value: {configured} bytes\n\
                    Valid range: 1 - {limit} bytes\n\n\
                    Please update limits.max_theme_bytes in config.toml."
                )
            }
            ConfigValidationError::ImageUploadLimit { configured, limit } => {
                format!(
                    "Image upload limit out of range!\n\n\
                    Your configured value: {configured} bytes\n\
                    Valid range: 1 - {limit} bytes\n\n\
                    Please update limits.max_image_bytes in config.toml."
                )
            }
            ConfigValidationError::CommunityTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Community registry timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update community.timeout_secs in config.toml."
                )
            }
            ConfigValidationError::CorsMaxAge { configured, limit } => {
                format!(
                    "CORS max age too high!\n\n\
                    Your configured value: {configured} seconds\n\
                    Recommended maximum: {limit} seconds\n\n\
                    Please update cors.max_age_secs in config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

impl ConfigLoadResult {
    pub fn into_result(self) -> Result<AppConfig, String> {
        match self {
            ConfigLoadResult::Success(config) => Ok(*config),
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => Err(msg),
        }
    }
}
