//! # Vigilance
//!
//! HTTP backend for the Vigilance dashboard. This crate wires the storage
//! services from the `server` crate to an axum router and owns everything
//! process-level: configuration, logging, the command line and the bundled
//! default themes.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod setup;
pub mod state;
