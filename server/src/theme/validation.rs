use crate::validation::Validator;
use thiserror::Error;

/// Longest accepted theme name or user id.
pub const MAX_IDENTIFIER_LEN: usize = 100;

/// Default upper bound for an uploaded theme file (5 MiB).
pub const DEFAULT_MAX_THEME_BYTES: usize = 5 * 1024 * 1024;

/// Validation errors for theme requests, checked before any storage call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeValidationError {
    #[error("Invalid theme name '{name}': {reason}")]
    InvalidThemeName { name: String, reason: String },
    #[error("Invalid user id '{user_id}': {reason}")]
    InvalidUserId { user_id: String, reason: String },
    #[error("Invalid theme content: {reason}")]
    InvalidContent { reason: String },
    #[error("Theme file too large: {size} bytes (limit: {limit})")]
    ContentTooLarge { size: usize, limit: usize },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidThemeName { .. } => {
                "Invalid theme name. Use only alphanumeric, dash, and underscore".to_string()
            }
            ThemeValidationError::InvalidUserId { .. } => {
                "Invalid user id. Use only alphanumeric, dash, and underscore".to_string()
            }
            ThemeValidationError::InvalidContent { .. } => "Invalid TOML format".to_string(),
            ThemeValidationError::ContentTooLarge { limit, .. } => {
                format!("Theme file too large (max {limit} bytes)")
            }
        }
    }
}

/// Why `input` is not an identifier, if it isn't one.
///
/// Identifiers are 1 to [`MAX_IDENTIFIER_LEN`] ASCII letters, digits, `-` or `_`.
fn identifier_problem(input: &str) -> Option<String> {
    if input.is_empty() {
        return Some("Name cannot be empty".to_string());
    }
    if input.len() > MAX_IDENTIFIER_LEN {
        return Some(format!("Name too long (max {MAX_IDENTIFIER_LEN} characters)"));
    }
    if !input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Some(
            "Name contains invalid characters (only alphanumeric, hyphens, and underscores allowed)"
                .to_string(),
        );
    }
    None
}

/// Validator for theme names used as file stems.
pub struct ThemeNameValidator;

impl Validator<str> for ThemeNameValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        match identifier_problem(input) {
            Some(reason) => Err(ThemeValidationError::InvalidThemeName {
                name: input.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

/// Validator for user ids, which name a directory under `uploads/`.
pub struct UserIdValidator;

impl Validator<str> for UserIdValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        match identifier_problem(input) {
            Some(reason) => Err(ThemeValidationError::InvalidUserId {
                user_id: input.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

/// Structural sanity check for uploaded theme files.
///
/// Only asks that the text contains a `[` and a `]` somewhere, i.e. that it
/// looks like it has a table header. It is not a TOML validator.
pub struct ThemeContentValidator {
    max_bytes: usize,
}

impl ThemeContentValidator {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }
}

impl Default for ThemeContentValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_THEME_BYTES)
    }
}

impl Validator<str> for ThemeContentValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.len() > self.max_bytes {
            return Err(ThemeValidationError::ContentTooLarge {
                size: input.len(),
                limit: self.max_bytes,
            });
        }

        if !input.contains('[') || !input.contains(']') {
            return Err(ThemeValidationError::InvalidContent {
                reason: "Content has no table brackets".to_string(),
            });
        }

        Ok(())
    }
}
