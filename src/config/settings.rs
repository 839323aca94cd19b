//! Admin panel settings loaded from environment variables.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::constants::{
    ADMIN_JWT_SECRET_ENV, API_TOKEN_SALT_ENV, DEFAULT_ADMIN_JWT_SECRET, DEFAULT_API_TOKEN_SALT,
    DEFAULT_ENCRYPTION_KEY, DEFAULT_FLAG_NPS, DEFAULT_FLAG_PROMOTE_EE,
    DEFAULT_TRANSFER_TOKEN_SALT, ENCRYPTION_KEY_ENV, FLAG_NPS_ENV, FLAG_PROMOTE_EE_ENV,
    TRANSFER_TOKEN_SALT_ENV,
};
use super::env;

/// Admin authentication settings.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AuthSettings {
    /// JWT signing secret for admin sessions
    #[serde(skip_serializing)]
    pub secret: String,
}

/// API token settings.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ApiTokenSettings {
    /// Salt mixed into API token hashes
    #[serde(skip_serializing)]
    pub salt: String,
}

/// Data-transfer token settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferSettings {
    pub token: TransferTokenSettings,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct TransferTokenSettings {
    /// Salt mixed into transfer token hashes
    #[serde(skip_serializing)]
    pub salt: String,
}

/// Settings for the encrypted secret store.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SecretStoreSettings {
    /// Key used to encrypt stored secrets at rest
    #[serde(skip_serializing)]
    pub encryption_key: String,
}

/// Feature flags for optional admin panel behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    /// Show in-app NPS surveys
    pub nps: bool,
    /// Promote Enterprise Edition features in the UI
    pub promote_ee: bool,
}

/// Resolved admin panel configuration.
///
/// Constructed once at process start; every field holds either the
/// environment value or its documented default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminConfig {
    pub auth: AuthSettings,
    pub api_token: ApiTokenSettings,
    pub transfer: TransferSettings,
    pub secrets: SecretStoreSettings,
    pub flags: FeatureFlags,
}

// Don't expose secret material in debug output (security)
impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for ApiTokenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiTokenSettings")
            .field("salt", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for TransferTokenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferTokenSettings")
            .field("salt", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for SecretStoreSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretStoreSettings")
            .field("encryption_key", &"[REDACTED]")
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored when present.
    /// Every lookup falls back to its documented default, so loading
    /// cannot fail; secrets left at their built-in defaults are
    /// reported with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let config = Self {
            auth: AuthSettings {
                secret: env::string(ADMIN_JWT_SECRET_ENV, DEFAULT_ADMIN_JWT_SECRET),
            },
            api_token: ApiTokenSettings {
                salt: env::string(API_TOKEN_SALT_ENV, DEFAULT_API_TOKEN_SALT),
            },
            transfer: TransferSettings {
                token: TransferTokenSettings {
                    salt: env::string(TRANSFER_TOKEN_SALT_ENV, DEFAULT_TRANSFER_TOKEN_SALT),
                },
            },
            secrets: SecretStoreSettings {
                encryption_key: env::string(ENCRYPTION_KEY_ENV, DEFAULT_ENCRYPTION_KEY),
            },
            flags: FeatureFlags {
                nps: env::bool(FLAG_NPS_ENV, DEFAULT_FLAG_NPS),
                promote_ee: env::bool(FLAG_PROMOTE_EE_ENV, DEFAULT_FLAG_PROMOTE_EE),
            },
        };

        let defaulted = config.default_secrets_in_use();
        if !defaulted.is_empty() {
            tracing::warn!(
                "Using built-in default values for: {}",
                defaulted.join(", ")
            );
        }

        config
    }

    /// Process-wide configuration instance.
    ///
    /// Resolved from the environment on first access and immutable for
    /// the process lifetime.
    pub fn global() -> &'static AdminConfig {
        static INSTANCE: Lazy<AdminConfig> = Lazy::new(AdminConfig::from_env);
        &INSTANCE
    }

    /// Environment variable names of secrets still holding their
    /// built-in default values.
    pub fn default_secrets_in_use(&self) -> Vec<&'static str> {
        let mut defaulted = Vec::new();
        if self.auth.secret == DEFAULT_ADMIN_JWT_SECRET {
            defaulted.push(ADMIN_JWT_SECRET_ENV);
        }
        if self.api_token.salt == DEFAULT_API_TOKEN_SALT {
            defaulted.push(API_TOKEN_SALT_ENV);
        }
        if self.transfer.token.salt == DEFAULT_TRANSFER_TOKEN_SALT {
            defaulted.push(TRANSFER_TOKEN_SALT_ENV);
        }
        if self.secrets.encryption_key == DEFAULT_ENCRYPTION_KEY {
            defaulted.push(ENCRYPTION_KEY_ENV);
        }
        defaulted
    }

    /// Get the admin JWT secret bytes for token signing/verification.
    pub fn auth_secret_bytes(&self) -> &[u8] {
        self.auth.secret.as_bytes()
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            auth: AuthSettings {
                secret: DEFAULT_ADMIN_JWT_SECRET.to_string(),
            },
            api_token: ApiTokenSettings {
                salt: DEFAULT_API_TOKEN_SALT.to_string(),
            },
            transfer: TransferSettings {
                token: TransferTokenSettings {
                    salt: DEFAULT_TRANSFER_TOKEN_SALT.to_string(),
                },
            },
            secrets: SecretStoreSettings {
                encryption_key: DEFAULT_ENCRYPTION_KEY.to_string(),
            },
            flags: FeatureFlags {
                nps: DEFAULT_FLAG_NPS,
                promote_ee: DEFAULT_FLAG_PROMOTE_EE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::TEST_ENV_LOCK;
    use crate::config::RECOGNIZED_ENV_VARS;

    fn lock() -> std::sync::MutexGuard<'static, ()> {
        TEST_ENV_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn clear_admin_env() {
        for name in RECOGNIZED_ENV_VARS {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_from_env_all_unset_resolves_defaults() {
        let _guard = lock();
        clear_admin_env();

        let config = AdminConfig::from_env();
        assert_eq!(config, AdminConfig::default());
        assert_eq!(config.auth.secret, DEFAULT_ADMIN_JWT_SECRET);
        assert_eq!(config.api_token.salt, DEFAULT_API_TOKEN_SALT);
        assert_eq!(config.transfer.token.salt, DEFAULT_TRANSFER_TOKEN_SALT);
        assert_eq!(config.secrets.encryption_key, DEFAULT_ENCRYPTION_KEY);
        assert!(config.flags.nps);
        assert!(config.flags.promote_ee);
    }

    #[test]
    fn test_from_env_set_values_win() {
        let _guard = lock();
        clear_admin_env();
        std::env::set_var(ADMIN_JWT_SECRET_ENV, "explicit-jwt-secret");
        std::env::set_var(API_TOKEN_SALT_ENV, "explicit-api-salt");
        std::env::set_var(TRANSFER_TOKEN_SALT_ENV, "explicit-transfer-salt");
        std::env::set_var(ENCRYPTION_KEY_ENV, "explicit-encryption-key");
        std::env::set_var(FLAG_NPS_ENV, "false");
        std::env::set_var(FLAG_PROMOTE_EE_ENV, "0");

        let config = AdminConfig::from_env();
        assert_eq!(config.auth.secret, "explicit-jwt-secret");
        assert_eq!(config.api_token.salt, "explicit-api-salt");
        assert_eq!(config.transfer.token.salt, "explicit-transfer-salt");
        assert_eq!(config.secrets.encryption_key, "explicit-encryption-key");
        assert!(!config.flags.nps);
        assert!(!config.flags.promote_ee);

        clear_admin_env();
    }

    #[test]
    fn test_default_secrets_in_use_reports_all_when_unset() {
        let _guard = lock();
        clear_admin_env();

        let config = AdminConfig::from_env();
        assert_eq!(
            config.default_secrets_in_use(),
            vec![
                ADMIN_JWT_SECRET_ENV,
                API_TOKEN_SALT_ENV,
                TRANSFER_TOKEN_SALT_ENV,
                ENCRYPTION_KEY_ENV,
            ]
        );
    }

    #[test]
    fn test_default_secrets_in_use_omits_configured_secrets() {
        let _guard = lock();
        clear_admin_env();
        std::env::set_var(ADMIN_JWT_SECRET_ENV, "explicit-jwt-secret");
        std::env::set_var(ENCRYPTION_KEY_ENV, "explicit-encryption-key");

        let config = AdminConfig::from_env();
        assert_eq!(
            config.default_secrets_in_use(),
            vec![API_TOKEN_SALT_ENV, TRANSFER_TOKEN_SALT_ENV]
        );

        clear_admin_env();
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let config = AdminConfig::default();
        let rendered = format!("{:?}", config);

        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains(DEFAULT_ADMIN_JWT_SECRET));
        assert!(!rendered.contains(DEFAULT_API_TOKEN_SALT));
        assert!(!rendered.contains(DEFAULT_TRANSFER_TOKEN_SALT));
        assert!(!rendered.contains(DEFAULT_ENCRYPTION_KEY));
    }

    #[test]
    fn test_serialized_output_omits_secrets() {
        let config = AdminConfig::default();
        let json = serde_json::to_string(&config).unwrap();

        assert!(!json.contains(DEFAULT_ADMIN_JWT_SECRET));
        assert!(!json.contains(DEFAULT_API_TOKEN_SALT));
        assert!(!json.contains(DEFAULT_TRANSFER_TOKEN_SALT));
        assert!(!json.contains(DEFAULT_ENCRYPTION_KEY));
        assert!(json.contains("\"nps\":true"));
        assert!(json.contains("\"promote_ee\":true"));
    }

    #[test]
    fn test_auth_secret_bytes() {
        let config = AdminConfig::default();
        assert_eq!(
            config.auth_secret_bytes(),
            DEFAULT_ADMIN_JWT_SECRET.as_bytes()
        );
    }
}
