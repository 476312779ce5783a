//! # Theme Storage Module
//!
//! Catalogue of dashboard theme files kept on disk under a storage root.
//! Themes come from three places:
//!
//! - **Default** - bundled themes in `<root>/themes/default/<name>.toml`
//! - **User** - uploads in `<root>/uploads/<user_id>/<name>.toml`
//! - **Community** - a remote registry; never stored locally (see
//!   [`crate::community`])
//!
//! ## Architecture
//!
//! - [`extract`] - scans `key = "value"` lines for metadata
//! - [`loader`] - builds [`Theme`] records and lists directories
//! - [`storage`] - resolves paths, reads, saves and deletes theme files
//! - [`service`] - the [`ThemeService`] composed from the above
//! - [`validation`] - request-side validators for names and content
//!
//! ## Basic Usage
//!
//! ```no_run
//! use server::theme::ThemeService;
//!
//! let service = ThemeService::new("/var/lib/vigilance");
//!
//! for theme in service.get_default_themes() {
//!     println!("{} by {}", theme.name, theme.author);
//! }
//!
//! service.save_user_theme("alice", "sunset", "[colors]\nbg = \"#000\"")?;
//! let content = service.get_theme_content("user", "alice", "sunset")?;
//! assert!(content.starts_with("[colors]"));
//! # Ok::<(), server::theme::ThemeError>(())
//! ```
//!
//! ## Metadata
//!
//! Only four flat keys are read: `name`, `description`, `version` and
//! `author`. Everything else in a theme file is opaque to this module and is
//! returned verbatim by [`ThemeService::get_theme_content`]. Listing reads
//! metadata only; the full text is handed out on explicit single-theme fetch.
//!
//! ## Error Handling
//!
//! Listing never fails: missing directories are empty and unreadable files
//! are skipped with a warning. All other operations return [`ThemeError`],
//! whose [`ThemeError::user_message`] is safe to show to API clients.

pub mod errors;
pub mod extract;
pub mod loader;
pub mod service;
pub mod storage;
pub mod types;
pub mod validation;

pub use errors::{ThemeError, ThemeResult};
pub use service::ThemeService;
pub use types::{Theme, ThemeContent, ThemeSource};
