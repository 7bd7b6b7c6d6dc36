//! Access resolution commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use sharescope_core::config::AppConfig;
use sharescope_core::error::AppError;
use sharescope_core::types::{ResourceId, UserId};
use sharescope_entity::resource::Resource;
use sharescope_entity::user::User;
use sharescope_service::AccessService;

/// Arguments for access commands
#[derive(Debug, Args)]
pub struct AccessArgs {
    /// Access subcommand
    #[command(subcommand)]
    pub command: AccessCommand,
}

/// Access subcommands
#[derive(Debug, Subcommand)]
pub enum AccessCommand {
    /// List the users who can see a resource
    Resource {
        /// Resource id
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
    },
    /// List the resources a user can see
    User {
        /// User id
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: i64,
    /// Name
    name: String,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name,
        }
    }
}

/// Resource display row for table output
#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct ResourceRow {
    /// Resource ID
    id: i64,
    /// Name
    name: String,
    /// Visible to everyone
    #[tabled(rename = "public")]
    is_public: bool,
}

impl From<Resource> for ResourceRow {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id.get(),
            name: resource.name,
            is_public: resource.is_public,
        }
    }
}

/// Execute access commands
pub async fn execute(
    args: &AccessArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = AccessService::new(super::open_store(config).await?);

    match &args.command {
        AccessCommand::Resource { id } => {
            let users = service
                .resource_access_list(ResourceId::new(*id))
                .await?
                .ok_or_else(|| AppError::not_found(format!("resource {id} not found")))?;

            let rows: Vec<UserRow> = users.into_iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
        AccessCommand::User { id } => {
            let resources = service.user_resources(UserId::new(*id)).await?;

            let rows: Vec<ResourceRow> = resources.into_iter().map(ResourceRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
