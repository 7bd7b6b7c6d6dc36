//! Group and membership repository implementation.

use sqlx::{SqliteExecutor, SqlitePool};

use sharescope_core::error::{AppError, ErrorKind};
use sharescope_core::result::AppResult;
use sharescope_entity::group::{Group, GroupMembership};

/// Repository for groups and the `user_groups` link table.
#[derive(Debug, Clone)]
pub struct GroupRepository {
    pool: SqlitePool,
}

impl GroupRepository {
    /// Create a new group repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every group in ascending id order.
    pub async fn find_all(&self) -> AppResult<Vec<Group>> {
        sqlx::query_as::<_, Group>("SELECT id, name FROM groups ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list groups", e))
    }

    /// List every membership link.
    pub async fn find_memberships(&self) -> AppResult<Vec<GroupMembership>> {
        sqlx::query_as::<_, GroupMembership>(
            "SELECT user_id, group_id FROM user_groups ORDER BY group_id ASC, user_id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list group memberships", e)
        })
    }

    /// Insert a group with its identifier.
    pub async fn insert<'e, E>(executor: E, group: &Group) -> AppResult<()>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query("INSERT INTO groups (id, name) VALUES (?, ?)")
            .bind(group.id)
            .bind(&group.name)
            .execute(executor)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert group", e))
    }

    /// Insert a membership link through any executor.
    pub async fn insert_membership<'e, E>(executor: E, membership: GroupMembership) -> AppResult<()>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query("INSERT INTO user_groups (user_id, group_id) VALUES (?, ?)")
            .bind(membership.user_id)
            .bind(membership.group_id)
            .execute(executor)
            .await
            .map(|_| ())
            .map_err(|e| {
                let duplicate = matches!(
                    &e,
                    sqlx::Error::Database(db_err) if db_err.is_unique_violation()
                );
                if duplicate {
                    AppError::with_source(
                        ErrorKind::Validation,
                        format!(
                            "User {} is already a member of group {}",
                            membership.user_id, membership.group_id
                        ),
                        e,
                    )
                } else {
                    AppError::with_source(
                        ErrorKind::Database,
                        "Failed to insert group membership",
                        e,
                    )
                }
            })
    }
}
