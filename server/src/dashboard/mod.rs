//! # Dashboard Assets
//!
//! Storage for the two pieces of dashboard appearance that are not themes:
//!
//! - [`ImageStore`] - uploaded background images, plus which one is current
//! - [`ColorStore`] - the accent [`ColorPalette`], persisted as JSON
//!
//! Both are plain file stores owned by the application state; neither keeps a
//! global.

pub mod colors;
pub mod errors;
pub mod image;

pub use colors::{ColorPalette, ColorStore};
pub use errors::{DashboardError, DashboardResult};
pub use image::ImageStore;
