//! Job configuration
//!
//! Provides the built-in job, TOML job files and CLI overrides.

pub mod loader;
pub mod schema;

pub use loader::{load_job, resolve_job, CliOverrides, ConfigError};
pub use schema::*;
