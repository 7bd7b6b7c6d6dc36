//! Start the ShareScope server.

use clap::Args;

use crate::output;
use sharescope_core::config::AppConfig;
use sharescope_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip database migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    config.validate()?;

    println!("Starting ShareScope server...");
    output::print_kv("Host", &config.server.host);
    output::print_kv("Port", &config.server.port.to_string());
    output::print_kv("Database", &config.database.url);

    let db = super::create_db_pool(&config).await?;

    if !args.no_migrate {
        sharescope_database::migration::run_migrations(db.pool()).await?;
        output::print_success("Migrations applied.");
    }

    sharescope_api::run_server(config, db.into_pool()).await
}
