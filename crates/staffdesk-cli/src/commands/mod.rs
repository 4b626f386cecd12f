//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;
pub mod serve;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use staffdesk_auth::jwt::TokenService;
use staffdesk_auth::password::{PasswordHasher, PasswordPolicy};
use staffdesk_core::config::AppConfig;
use staffdesk_core::error::AppError;
use staffdesk_database::Stores;
use staffdesk_service::AuthService;

use crate::output::OutputFormat;

/// StaffDesk: departments, employees and the accounts linked to them
#[derive(Debug, Parser)]
#[command(name = "staffdesk", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Bootstrap admin accounts
    Admin(admin::AdminArgs),
    /// Inspect login accounts
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Admin(args) => admin::execute(args, &self.config, self.format).await,
            Commands::User(args) => user::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load and validate configuration
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    let config = AppConfig::load(config_path)?;
    config.validate()?;
    Ok(config)
}

/// Helper: account service over freshly connected stores
pub async fn connect_auth_service(config: &AppConfig) -> Result<(Stores, AuthService), AppError> {
    let stores = Stores::connect(&config.database).await?;
    let service = AuthService::new(
        Arc::clone(&stores.users),
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordPolicy::new(&config.auth)),
        Arc::new(TokenService::new(&config.auth)?),
    );
    Ok((stores, service))
}
