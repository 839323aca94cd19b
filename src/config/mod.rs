//! Application configuration module
//!
//! Handles environment variables, default values, and application-wide
//! constants.

mod constants;
pub mod env;
mod settings;

pub use constants::*;
pub use settings::{
    AdminConfig, ApiTokenSettings, AuthSettings, FeatureFlags, SecretStoreSettings,
    TransferSettings, TransferTokenSettings,
};
