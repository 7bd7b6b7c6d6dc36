//! Demo data seeding command.

use clap::Args;

use crate::output;
use sharescope_core::config::AppConfig;
use sharescope_core::error::AppError;
use sharescope_database::migration::run_migrations;
use sharescope_database::seed;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    pub force: bool,
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, config: &AppConfig) -> Result<(), AppError> {
    let db = super::create_db_pool(config).await?;
    run_migrations(db.pool()).await?;

    if !args.force && !seed::is_empty(db.pool()).await? {
        let confirm = dialoguer::Confirm::new()
            .with_prompt("This will DELETE all users, groups, resources, and shares. Continue?")
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirm {
            output::print_warning("Cancelled.");
            return Ok(());
        }
    }

    let snapshot = seed::demo_snapshot();
    seed::seed(db.pool(), &snapshot).await?;
    db.close().await;

    output::print_success(&format!(
        "Seeded {} users, {} groups, {} resources, {} shares.",
        snapshot.users.len(),
        snapshot.groups.len(),
        snapshot.resources.len(),
        snapshot.shares.len()
    ));
    Ok(())
}
