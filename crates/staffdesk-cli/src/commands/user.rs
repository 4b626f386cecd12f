//! Login account listing.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use staffdesk_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all accounts, ordered by email
    List,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    email: String,
    role: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        UserCommand::List => {
            let (stores, service) = super::connect_auth_service(&config).await?;
            let users = service.list_users().await;
            stores.close().await;

            let rows: Vec<UserRow> = users?
                .into_iter()
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    email: u.email,
                    role: u.role.to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
