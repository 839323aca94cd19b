//! Show command - Print the resolved configuration.

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::{
    AdminConfig, ADMIN_JWT_SECRET_ENV, API_TOKEN_SALT_ENV, ENCRYPTION_KEY_ENV,
    TRANSFER_TOKEN_SALT_ENV,
};
use crate::errors::AppResult;

/// Execute the show command
pub fn execute(args: ShowArgs, config: AdminConfig) -> AppResult<()> {
    match args.format {
        OutputFormat::Text => print_text(&config),
        OutputFormat::Json => {
            // Secret fields are omitted by the Serialize impl
            let rendered = serde_json::to_string_pretty(&config)?;
            println!("{}", rendered);
        }
    }

    Ok(())
}

/// Print a human-readable listing, one dotted path per line.
fn print_text(config: &AdminConfig) {
    let defaulted = config.default_secrets_in_use();
    let secret_rows = [
        ("auth.secret", ADMIN_JWT_SECRET_ENV),
        ("api_token.salt", API_TOKEN_SALT_ENV),
        ("transfer.token.salt", TRANSFER_TOKEN_SALT_ENV),
        ("secrets.encryption_key", ENCRYPTION_KEY_ENV),
    ];

    for (path, env_name) in secret_rows {
        let origin = if defaulted.contains(&env_name) {
            "default"
        } else {
            "environment"
        };
        println!("{:<24} [REDACTED] ({})", path, origin);
    }

    println!("{:<24} {}", "flags.nps", config.flags.nps);
    println!("{:<24} {}", "flags.promote_ee", config.flags.promote_ee);
}
