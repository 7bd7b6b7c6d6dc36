//! CLI command definitions and dispatch.

pub mod access;
pub mod migrate;
pub mod report;
pub mod seed;
pub mod serve;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use sharescope_core::config::AppConfig;
use sharescope_core::error::AppError;
use sharescope_database::{AccessStore, DatabasePool, SqlAccessStore};

/// ShareScope: who can see what
#[derive(Debug, Parser)]
#[command(name = "sharescope", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects `config/{env}.toml`)
    #[arg(short, long, env = "SHARESCOPE_ENV", default_value = "development")]
    pub env: String,

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
    /// Apply pending database migrations
    Migrate,
    /// Replace the database contents with the demo data set
    Seed(seed::SeedArgs),
    /// Resolve access for one resource or one user
    Access(access::AccessArgs),
    /// Print visibility reports
    Report(report::ReportArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(&self.env)?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(&config).await,
            Commands::Seed(args) => seed::execute(args, &config).await,
            Commands::Access(args) => access::execute(args, &config, self.format).await,
            Commands::Report(args) => report::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: load configuration for an environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: open a store over a migrated database
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn AccessStore>, AppError> {
    let db = create_db_pool(config).await?;
    sharescope_database::migration::run_migrations(db.pool()).await?;
    Ok(Arc::new(SqlAccessStore::new(db.into_pool())))
}
