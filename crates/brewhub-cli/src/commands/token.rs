//! Development token issuance.

use clap::{Args, Subcommand};
use serde::Serialize;
use uuid::Uuid;

use brewhub_auth::JwtEncoder;
use brewhub_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Sign a bearer token with the configured secret
    Issue {
        /// Actor ID for the `sub` claim; a fresh ID when omitted
        #[arg(long)]
        user_id: Option<Uuid>,
        /// Display name; prompted for when omitted
        #[arg(long)]
        username: Option<String>,
        /// Override the configured token lifetime
        #[arg(long)]
        ttl_minutes: Option<u64>,
    },
}

#[derive(Debug, Serialize)]
struct IssuedOutput {
    user_id: Uuid,
    username: String,
    access_token: String,
    expires_at: String,
}

/// Execute token commands
pub async fn execute(
    args: &TokenArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    match &args.command {
        TokenCommand::Issue {
            user_id,
            username,
            ttl_minutes,
        } => {
            if let Some(ttl) = ttl_minutes {
                config.auth.jwt_access_ttl_minutes = *ttl;
            }

            let username = match username {
                Some(name) => name.clone(),
                None => dialoguer::Input::<String>::new()
                    .with_prompt("Username")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };
            let user_id = user_id.unwrap_or_else(Uuid::now_v7);

            let issued = JwtEncoder::new(&config.auth).issue_access_token(user_id, &username)?;

            match format {
                OutputFormat::Json => output::print_json(&IssuedOutput {
                    user_id,
                    username,
                    access_token: issued.access_token,
                    expires_at: issued.expires_at.to_rfc3339(),
                }),
                OutputFormat::Table => {
                    output::print_success("Token issued");
                    output::print_kv("User ID", &user_id.to_string());
                    output::print_kv("Username", &username);
                    output::print_kv("Expires", &issued.expires_at.to_rfc3339());
                    println!();
                    println!("{}", issued.access_token);
                }
            }
        }
    }

    Ok(())
}
