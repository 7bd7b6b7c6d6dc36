//! Access resolution queries.
//!
//! Every query here expresses the effective-access union (direct shares
//! plus shares to groups the user belongs to) with SQL set semantics, so a
//! user reachable through several grants is returned or counted once.

use sqlx::SqlitePool;

use sharescope_core::error::{AppError, ErrorKind};
use sharescope_core::result::AppResult;
use sharescope_core::types::{ResourceId, UserId};
use sharescope_entity::report::{ResourceUserCount, UserResourceCount};
use sharescope_entity::resource::Resource;
use sharescope_entity::user::User;

/// `(resource_id, user_id)` pairs granted through shares, de-duplicated.
const SHARE_GRANTS: &str = "\
    SELECT rs.resource_id AS resource_id, rs.user_id AS user_id \
    FROM resource_shares rs \
    WHERE rs.user_id IS NOT NULL \
    UNION \
    SELECT rs.resource_id AS resource_id, ug.user_id AS user_id \
    FROM resource_shares rs \
    JOIN user_groups ug ON ug.group_id = rs.group_id";

/// Read-only queries over shares, memberships, and the public flag.
#[derive(Debug, Clone)]
pub struct AccessRepository {
    pool: SqlitePool,
}

impl AccessRepository {
    /// Create a new access repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Users reaching a resource through direct or group shares.
    ///
    /// The public flag is not consulted here.
    pub async fn users_for_resource(&self, resource_id: ResourceId) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT u.id, u.name FROM users u \
             WHERE u.id IN ( \
                 SELECT rs.user_id FROM resource_shares rs \
                 WHERE rs.resource_id = ? AND rs.user_id IS NOT NULL \
                 UNION \
                 SELECT ug.user_id FROM resource_shares rs \
                 JOIN user_groups ug ON ug.group_id = rs.group_id \
                 WHERE rs.resource_id = ? \
             ) \
             ORDER BY u.id ASC",
        )
        .bind(resource_id)
        .bind(resource_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to resolve resource access list", e)
        })
    }

    /// Resources a user can see: direct shares, group shares, and all public
    /// resources.
    pub async fn resources_for_user(&self, user_id: UserId) -> AppResult<Vec<Resource>> {
        sqlx::query_as::<_, Resource>(
            "SELECT r.id, r.name, r.is_public FROM resources r \
             WHERE r.is_public = 1 \
                OR r.id IN ( \
                    SELECT rs.resource_id FROM resource_shares rs WHERE rs.user_id = ? \
                    UNION \
                    SELECT rs.resource_id FROM resource_shares rs \
                    JOIN user_groups ug ON ug.group_id = rs.group_id \
                    WHERE ug.user_id = ? \
                ) \
             ORDER BY r.id ASC",
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to resolve user resources", e)
        })
    }

    /// Distinct user count per non-public resource that has any grant.
    pub async fn private_resource_user_counts(&self) -> AppResult<Vec<ResourceUserCount>> {
        let sql = format!(
            "SELECT g.resource_id AS resource_id, COUNT(DISTINCT g.user_id) AS user_count \
             FROM ({SHARE_GRANTS}) g \
             JOIN resources r ON r.id = g.resource_id \
             WHERE r.is_public = 0 \
             GROUP BY g.resource_id \
             ORDER BY g.resource_id ASC"
        );

        sqlx::query_as::<_, ResourceUserCount>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to count users per private resource",
                    e,
                )
            })
    }

    /// Distinct non-public resource count per user that has any grant.
    pub async fn user_private_resource_counts(&self) -> AppResult<Vec<UserResourceCount>> {
        let sql = format!(
            "SELECT g.user_id AS user_id, COUNT(DISTINCT g.resource_id) AS resource_count \
             FROM ({SHARE_GRANTS}) g \
             JOIN resources r ON r.id = g.resource_id \
             WHERE r.is_public = 0 \
             GROUP BY g.user_id \
             ORDER BY g.user_id ASC"
        );

        sqlx::query_as::<_, UserResourceCount>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to count private resources per user",
                    e,
                )
            })
    }
}
