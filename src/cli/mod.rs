//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `show` - Print the resolved configuration
//! - `check` - Audit secrets for built-in default values
//! - `vars` - List the recognized environment variables

pub mod args;

pub use args::{Cli, Commands};
