//! Database migration management commands.

use clap::{Args, Subcommand};

use staffdesk_core::config::StoreProvider;
use staffdesk_core::error::AppError;
use staffdesk_database::DatabasePool;
use staffdesk_database::migration::run_migrations;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        MigrateCommand::Run => {
            if config.database.provider == StoreProvider::Memory {
                output::print_success("Memory provider selected; nothing to migrate.");
                return Ok(());
            }

            let db = DatabasePool::connect(&config.database).await?;
            println!("Running database migrations...");
            run_migrations(db.pool()).await?;
            db.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
