//! Application-wide constants
//!
//! Centralized location for environment variable names and default
//! values to improve maintainability.

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Admin authentication JWT signing secret
pub const ADMIN_JWT_SECRET_ENV: &str = "ADMIN_JWT_SECRET";

/// Salt used when hashing API tokens
pub const API_TOKEN_SALT_ENV: &str = "API_TOKEN_SALT";

/// Salt used when hashing data-transfer tokens
pub const TRANSFER_TOKEN_SALT_ENV: &str = "TRANSFER_TOKEN_SALT";

/// Key used to encrypt stored secrets at rest
pub const ENCRYPTION_KEY_ENV: &str = "ENCRYPTION_KEY";

/// Feature flag: in-app NPS surveys
pub const FLAG_NPS_ENV: &str = "FLAG_NPS";

/// Feature flag: promotion of Enterprise Edition features
pub const FLAG_PROMOTE_EE_ENV: &str = "FLAG_PROMOTE_EE";

/// All recognized environment variables, in documentation order
pub const RECOGNIZED_ENV_VARS: &[&str] = &[
    ADMIN_JWT_SECRET_ENV,
    API_TOKEN_SALT_ENV,
    TRANSFER_TOKEN_SALT_ENV,
    ENCRYPTION_KEY_ENV,
    FLAG_NPS_ENV,
    FLAG_PROMOTE_EE_ENV,
];

// =============================================================================
// Default Values
// =============================================================================

/// Built-in admin JWT secret (development fallback)
pub const DEFAULT_ADMIN_JWT_SECRET: &str = "defaultAdminJWTSecret";

/// Built-in API token salt (development fallback)
pub const DEFAULT_API_TOKEN_SALT: &str = "defaultApiTokenSalt";

/// Built-in transfer token salt (development fallback)
pub const DEFAULT_TRANSFER_TOKEN_SALT: &str = "defaultTransferTokenSalt";

/// Built-in secrets encryption key (development fallback)
pub const DEFAULT_ENCRYPTION_KEY: &str = "defaultEncryptionKey";

/// NPS surveys are enabled unless switched off
pub const DEFAULT_FLAG_NPS: bool = true;

/// EE promotion is enabled unless switched off
pub const DEFAULT_FLAG_PROMOTE_EE: bool = true;

// =============================================================================
// Boolean Conversion
// =============================================================================

/// Strings accepted as `true` (compared case-insensitively)
pub const TRUTHY_VALUES: &[&str] = &["true", "1", "yes", "on"];

/// Strings accepted as `false` (compared case-insensitively)
pub const FALSY_VALUES: &[&str] = &["false", "0", "no", "off"];
