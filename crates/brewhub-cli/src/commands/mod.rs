//! CLI command definitions and dispatch.

pub mod config;
pub mod migrate;
pub mod recipe;
pub mod token;

use clap::{Parser, Subcommand};

use brewhub_core::config::AppConfig;
use brewhub_core::error::AppError;
use brewhub_database::{DatabasePool, Stores};

use crate::output::OutputFormat;

/// BrewHub: recipe versioning administration
#[derive(Debug, Parser)]
#[command(name = "brewhub", version, about, long_about = None)]
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
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Development bearer tokens
    Token(token::TokenArgs),
    /// Recipe inspection and archiving
    Recipe(recipe::RecipeArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.config, self.format).await,
            Commands::Token(args) => token::execute(args, &self.config, self.format).await,
            Commands::Recipe(args) => recipe::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file plus `BREWHUB__*` overrides
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_from(config_path)
}

/// Helper: connect to PostgreSQL without applying migrations
pub async fn connect_database(config: &AppConfig) -> Result<DatabasePool, AppError> {
    let mut database = config.database.clone();
    database.run_migrations = false;
    DatabasePool::connect(&database).await
}

/// Helper: open the configured recipe store
pub async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    Stores::from_config(config).await
}
