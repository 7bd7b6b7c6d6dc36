//! Demo data for local development and tests.

use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::info;

use sharescope_core::error::{AppError, ErrorKind};
use sharescope_core::result::AppResult;
use sharescope_core::types::ShareId;
use sharescope_entity::group::{Group, GroupMembership};
use sharescope_entity::resource::Resource;
use sharescope_entity::share::{NewShare, Share};
use sharescope_entity::user::User;

use crate::repositories::group::GroupRepository;
use crate::repositories::resource::ResourceRepository;
use crate::repositories::share::ShareRepository;
use crate::repositories::user::UserRepository;
use crate::store::Snapshot;

/// Tables cleared by [`reset`], children first.
const TABLES: [&str; 5] = ["resource_shares", "user_groups", "resources", "groups", "users"];

/// The demo organisation: five users, three groups, ten resources.
pub fn demo_snapshot() -> Snapshot {
    let users = vec![
        User::new(1, "Alice"),
        User::new(2, "Bob"),
        User::new(3, "Charlie"),
        User::new(4, "David"),
        User::new(5, "Eve"),
    ];

    let groups = vec![
        Group::new(1, "Developers"),
        Group::new(2, "Testers"),
        Group::new(3, "Admins"),
    ];

    let memberships = vec![
        GroupMembership::new(1, 1),
        GroupMembership::new(2, 1),
        GroupMembership::new(2, 2),
        GroupMembership::new(3, 2),
        GroupMembership::new(4, 3),
    ];

    let resources = vec![
        Resource::private(1, "Alice's Personal Draft"),
        Resource::private(2, "Project Codebase"),
        Resource::public(3, "Public Company Announcement"),
        Resource::private(4, "Orphaned Document"),
        Resource::private(5, "Q3 Testing Plan"),
        Resource::private(6, "Admin Dashboard Access"),
        Resource::public(7, "Company-Wide Best Practices"),
        Resource::public(8, "CEO's Open Letter"),
        Resource::public(9, "Emergency Protocol"),
        Resource::private(10, "Cross-Functional Project 'Phoenix'"),
    ];

    let shares = [
        NewShare::with_user(1, 1),
        NewShare::with_group(2, 1),
        NewShare::with_user(5, 2),
        NewShare::with_group(5, 2),
        NewShare::with_group(6, 3),
        NewShare::with_user(6, 5),
        NewShare::with_group(7, 1),
        NewShare::with_user(8, 4),
        NewShare::with_user(9, 1),
        NewShare::with_group(9, 3),
        NewShare::with_user(10, 5),
        NewShare::with_group(10, 1),
        NewShare::with_group(10, 2),
    ]
    .into_iter()
    .zip(1..)
    .map(|(share, id)| Share {
        id: ShareId(id),
        resource_id: share.resource_id,
        target: share.target,
    })
    .collect();

    Snapshot {
        users,
        groups,
        memberships,
        resources,
        shares,
    }
}

/// Delete every row from the access tables.
pub async fn reset(pool: &SqlitePool) -> AppResult<()> {
    let mut tx = pool.begin().await.map_err(begin_error)?;
    clear(&mut tx).await?;
    tx.commit().await.map_err(commit_error)?;

    info!("Cleared access tables");
    Ok(())
}

async fn clear(tx: &mut Transaction<'_, Sqlite>) -> AppResult<()> {
    for table in TABLES {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to clear table '{table}'"),
                    e,
                )
            })?;
    }
    Ok(())
}

/// Replace the contents of the access tables with a snapshot, in one
/// transaction. Every row keeps the id it has in the snapshot.
pub async fn seed(pool: &SqlitePool, snapshot: &Snapshot) -> AppResult<()> {
    let mut tx = pool.begin().await.map_err(begin_error)?;
    clear(&mut tx).await?;

    for user in &snapshot.users {
        UserRepository::insert(&mut *tx, user).await?;
    }
    for group in &snapshot.groups {
        GroupRepository::insert(&mut *tx, group).await?;
    }
    for membership in &snapshot.memberships {
        GroupRepository::insert_membership(&mut *tx, *membership).await?;
    }
    for resource in &snapshot.resources {
        ResourceRepository::insert(&mut *tx, resource).await?;
    }
    for share in &snapshot.shares {
        ShareRepository::insert_with_id(&mut *tx, share).await?;
    }

    tx.commit().await.map_err(commit_error)?;

    info!(
        users = snapshot.users.len(),
        groups = snapshot.groups.len(),
        resources = snapshot.resources.len(),
        shares = snapshot.shares.len(),
        "Seeded access tables"
    );
    Ok(())
}

/// Whether the access tables hold any users yet.
pub async fn is_empty(pool: &SqlitePool) -> AppResult<bool> {
    UserRepository::new(pool.clone())
        .count()
        .await
        .map(|count| count == 0)
}

fn begin_error(e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
}

fn commit_error(e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
}
