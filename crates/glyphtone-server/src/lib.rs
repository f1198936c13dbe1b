//! Glyphtone Server — HTTP API over the transformation engine.
//!
//! Routes, response shapes and configuration live here so both binaries
//! and the tests can share them.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::{AppState, router};
