//! Admin Config - Environment-driven configuration for the admin panel
//!
//! This crate resolves the admin panel's secret values and feature
//! flags from environment variables, falling back to built-in defaults
//! when a variable is unset. Resolution is total: loading never fails.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Environment lookup, defaults, and the settings record
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the resolved configuration (secrets redacted)
//! cargo run -- show
//!
//! # Fail when any secret still uses its built-in default
//! cargo run -- check --strict
//!
//! # List the recognized environment variables
//! cargo run -- vars
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{AdminConfig, FeatureFlags};
pub use errors::{AppError, AppResult};
