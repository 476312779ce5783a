//! # Server Utilities Module
//!
//! Small helpers shared by the server crate and the application binary.
//!
//! ### Environment Variable Utilities
//!
//! The [`env`] module gives validated access to environment variables, used
//! for secrets that should not live in `config.toml`:
//!
//! ```no_run
//! use server::utils::env::EnvUtils;
//!
//! // Optional GitHub token for the community theme registry
//! let token = EnvUtils::get_optional_var("VIGILANCE_GITHUB_TOKEN");
//! ```

pub mod env;
