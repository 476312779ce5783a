//! # Vigilance Server Library
//!
//! Core library for the Vigilance dashboard backend. It owns everything that
//! touches the storage root on disk and the remote community theme registry,
//! leaving HTTP routing to the application crate.
//!
//! ## Modules
//!
//! - [`theme`] - Theme catalogue: metadata extraction, directory listing,
//!   per-user saving and deleting of theme files
//! - [`dashboard`] - Background image and color palette storage
//! - [`community`] - Client for the community theme registry on GitHub
//! - [`common`] - Shared error types for network operations
//! - [`utils`] - Environment variable helpers
//! - [`validation`] - The [`validation::Validator`] trait used by request validators

pub mod common;
pub mod community;
pub mod dashboard;
pub mod theme;
pub mod utils;
pub mod validation;
