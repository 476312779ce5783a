//! Environment variable utilities for safe and validated access.
//!
//! Values are trimmed, and a variable that is set but blank counts as
//! missing.

use thiserror::Error;

/// Errors that can occur when accessing environment variables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvVarError {
    /// Environment variable is not set
    #[error(
        "Environment variable '{name}' not found. Please set this variable in your .env file or environment."
    )]
    NotFound { name: String },

    /// Environment variable contains invalid UTF-8 characters
    #[error(
        "Environment variable '{name}' contains invalid UTF-8 characters. Please check the value."
    )]
    InvalidUtf8 { name: String },

    /// Environment variable is set but contains only whitespace or is empty
    #[error("Environment variable '{name}' is empty. Please provide a valid value.")]
    Empty { name: String },
}

/// Utility functions for safe environment variable handling.
///
/// # Examples
///
/// ```no_run
/// use server::utils::env::EnvUtils;
///
/// match EnvUtils::get_validated_var("VIGILANCE_GITHUB_TOKEN") {
///     Ok(_) => println!("Using authenticated GitHub requests"),
///     Err(e) => println!("Anonymous GitHub requests: {}", e),
/// }
/// ```
pub struct EnvUtils;

impl EnvUtils {
    /// Gets an environment variable, trimmed and checked for emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`EnvVarError`] if:
    /// - The variable is not set ([`EnvVarError::NotFound`])
    /// - The variable is empty or contains only whitespace ([`EnvVarError::Empty`])
    /// - The variable contains invalid UTF-8 ([`EnvVarError::InvalidUtf8`])
    pub fn get_validated_var(name: &str) -> Result<String, EnvVarError> {
        match std::env::var(name) {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    Err(EnvVarError::Empty {
                        name: name.to_string(),
                    })
                } else {
                    Ok(trimmed.to_string())
                }
            }
            Err(std::env::VarError::NotPresent) => Err(EnvVarError::NotFound {
                name: name.to_string(),
            }),
            Err(std::env::VarError::NotUnicode(_)) => Err(EnvVarError::InvalidUtf8 {
                name: name.to_string(),
            }),
        }
    }

    /// Gets an optional environment variable.
    ///
    /// `None` when the variable is missing, blank or not valid UTF-8.
    pub fn get_optional_var(name: &str) -> Option<String> {
        Self::get_validated_var(name).ok()
    }
}
