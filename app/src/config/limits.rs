/// Hard limits for values accepted from `config.toml` and the environment.

/// Largest theme upload that may be configured (10 MiB)
pub const MAX_THEME_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Largest background image upload that may be configured (200 MiB)
pub const MAX_IMAGE_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

/// Bounds for the community registry request timeout
pub const MIN_COMMUNITY_TIMEOUT_SECS: u64 = 1;
pub const MAX_COMMUNITY_TIMEOUT_SECS: u64 = 120;

/// Longest CORS preflight cache that may be configured (one day)
pub const MAX_CORS_MAX_AGE_SECS: u64 = 86_400;
