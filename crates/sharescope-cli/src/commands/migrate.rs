//! Database migration command.

use crate::output;
use sharescope_core::config::AppConfig;
use sharescope_core::error::AppError;

/// Apply all pending migrations
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let db = super::create_db_pool(config).await?;

    println!("Running database migrations...");
    sharescope_database::migration::run_migrations(db.pool()).await?;
    db.close().await;

    output::print_success("All migrations applied successfully.");
    Ok(())
}
