//! Admin account bootstrap.

use clap::{Args, Subcommand};

use staffdesk_core::error::AppError;
use staffdesk_entity::user::Role;

use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create an admin account directly in the store
    Create {
        /// Email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        AdminCommand::Create { email, password } => {
            let email = match email {
                Some(e) => e.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin email")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let (stores, service) = super::connect_auth_service(&config).await?;
            let result = service.bootstrap(&email, &password, Role::Admin).await;
            stores.close().await;
            let user = result.map_err(describe)?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&user)?);
                }
                OutputFormat::Table => {
                    output::print_success("Admin account created");
                    output::print_kv("ID", &user.id.to_string());
                    output::print_kv("Email", &user.email);
                    output::print_kv("Role", user.role.as_str());
                }
            }
        }
    }

    Ok(())
}

/// Fold itemized validation messages into the error text shown on stderr.
fn describe(err: AppError) -> AppError {
    if err.errors.is_empty() {
        err
    } else {
        let detail = err.errors.join(" ");
        AppError::new(err.kind, format!("{} {detail}", err.message))
    }
}
