//! Visibility report commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use sharescope_core::config::AppConfig;
use sharescope_core::error::AppError;
use sharescope_entity::report::{ResourceWithUserCount, UserWithResourceCount};
use sharescope_service::ReportService;

/// Arguments for report commands
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report subcommand
    #[command(subcommand)]
    pub command: ReportCommand,
}

/// Report subcommands
#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Every resource with its number of viewers
    Resources,
    /// Every user with their number of visible resources
    Users,
}

/// Resource report row
#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct ResourceReportRow {
    #[tabled(rename = "id")]
    resource_id: i64,
    name: String,
    #[tabled(rename = "public")]
    is_public: bool,
    #[tabled(rename = "users")]
    user_count: i64,
}

impl From<ResourceWithUserCount> for ResourceReportRow {
    fn from(line: ResourceWithUserCount) -> Self {
        Self {
            resource_id: line.resource_id.get(),
            name: line.name,
            is_public: line.is_public,
            user_count: line.user_count,
        }
    }
}

/// User report row
#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct UserReportRow {
    #[tabled(rename = "id")]
    user_id: i64,
    name: String,
    #[tabled(rename = "resources")]
    resource_count: i64,
}

impl From<UserWithResourceCount> for UserReportRow {
    fn from(line: UserWithResourceCount) -> Self {
        Self {
            user_id: line.user_id.get(),
            name: line.name,
            resource_count: line.resource_count,
        }
    }
}

/// Execute report commands
pub async fn execute(
    args: &ReportArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = ReportService::new(super::open_store(config).await?);

    match &args.command {
        ReportCommand::Resources => {
            let rows: Vec<ResourceReportRow> = service
                .resources_with_user_count()
                .await?
                .into_iter()
                .map(ResourceReportRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        ReportCommand::Users => {
            let rows: Vec<UserReportRow> = service
                .users_with_resource_count()
                .await?
                .into_iter()
                .map(UserReportRow::from)
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
