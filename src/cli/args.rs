//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand, ValueEnum};

/// Admin Config - Environment-driven admin panel configuration
#[derive(Parser, Debug)]
#[command(name = "admin-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved configuration
    Show(ShowArgs),

    /// Audit secrets for built-in default values
    Check(CheckArgs),

    /// List the recognized environment variables
    Vars,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output formats for the show command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing with secrets redacted
    Text,
    /// JSON document with secret fields omitted
    Json,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Fail (non-zero exit) when any secret still uses its default
    #[arg(long)]
    pub strict: bool,
}
