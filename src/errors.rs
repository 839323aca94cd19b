//! Centralized error handling.
//!
//! Configuration resolution itself never fails (missing variables fall
//! back to defaults); this error type covers the CLI surface.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("{0}")]
    Validation(String),

    // Serialization
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}
