//! Check command - Audit secrets for built-in default values.

use crate::cli::args::CheckArgs;
use crate::config::AdminConfig;
use crate::errors::{AppError, AppResult};

/// Execute the check command
pub fn execute(args: CheckArgs, config: AdminConfig) -> AppResult<()> {
    let defaulted = config.default_secrets_in_use();

    if defaulted.is_empty() {
        tracing::info!("All secrets are explicitly configured");
        return Ok(());
    }

    for name in &defaulted {
        tracing::warn!("{} is still using its built-in default", name);
    }

    if args.strict {
        return Err(AppError::validation(format!(
            "{} secret(s) still using built-in defaults",
            defaulted.len()
        )));
    }

    Ok(())
}
