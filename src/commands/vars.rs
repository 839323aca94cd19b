//! Vars command - List the recognized environment variables.

use std::env;

use crate::config::{
    ADMIN_JWT_SECRET_ENV, API_TOKEN_SALT_ENV, DEFAULT_ADMIN_JWT_SECRET, DEFAULT_API_TOKEN_SALT,
    DEFAULT_ENCRYPTION_KEY, DEFAULT_FLAG_NPS, DEFAULT_FLAG_PROMOTE_EE,
    DEFAULT_TRANSFER_TOKEN_SALT, ENCRYPTION_KEY_ENV, FLAG_NPS_ENV, FLAG_PROMOTE_EE_ENV,
    TRANSFER_TOKEN_SALT_ENV,
};
use crate::errors::AppResult;

/// Execute the vars command
pub fn execute() -> AppResult<()> {
    let rows = [
        (ADMIN_JWT_SECRET_ENV, DEFAULT_ADMIN_JWT_SECRET.to_string()),
        (API_TOKEN_SALT_ENV, DEFAULT_API_TOKEN_SALT.to_string()),
        (
            TRANSFER_TOKEN_SALT_ENV,
            DEFAULT_TRANSFER_TOKEN_SALT.to_string(),
        ),
        (ENCRYPTION_KEY_ENV, DEFAULT_ENCRYPTION_KEY.to_string()),
        (FLAG_NPS_ENV, DEFAULT_FLAG_NPS.to_string()),
        (FLAG_PROMOTE_EE_ENV, DEFAULT_FLAG_PROMOTE_EE.to_string()),
    ];

    for (name, default) in rows {
        let status = if env::var_os(name).is_some() {
            "set"
        } else {
            "unset"
        };
        println!("{:<20} default={:<26} {}", name, default, status);
    }

    Ok(())
}
