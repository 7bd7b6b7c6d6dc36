//! Share repository implementation.

use sqlx::{SqliteExecutor, SqlitePool};

use sharescope_core::error::{AppError, ErrorKind};
use sharescope_core::result::AppResult;
use sharescope_core::types::ShareId;
use sharescope_entity::share::{NewShare, Share, ShareRecord};

/// Repository for `resource_shares` rows.
#[derive(Debug, Clone)]
pub struct ShareRepository {
    pool: SqlitePool,
}

impl ShareRepository {
    /// Create a new share repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every share in ascending id order.
    pub async fn find_all(&self) -> AppResult<Vec<Share>> {
        let records = sqlx::query_as::<_, ShareRecord>(
            "SELECT id, resource_id, user_id, group_id FROM resource_shares ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list shares", e))?;

        records.into_iter().map(Share::try_from).collect()
    }

    /// Create a share and return it with its assigned id.
    pub async fn create(&self, data: &NewShare) -> AppResult<Share> {
        Self::insert(&self.pool, data).await
    }

    /// Insert a share through any executor.
    ///
    /// The target columns are derived from [`ShareTarget`](sharescope_entity::ShareTarget),
    /// so exactly one of `user_id` / `group_id` is ever written.
    pub async fn insert<'e, E>(executor: E, data: &NewShare) -> AppResult<Share>
    where
        E: SqliteExecutor<'e>,
    {
        let id = sqlx::query_scalar::<_, ShareId>(
            "INSERT INTO resource_shares (resource_id, user_id, group_id) \
             VALUES (?, ?, ?) RETURNING id",
        )
        .bind(data.resource_id)
        .bind(data.target.user_id())
        .bind(data.target.group_id())
        .fetch_one(executor)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert share", e))?;

        Ok(Share {
            id,
            resource_id: data.resource_id,
            target: data.target,
        })
    }

    /// Insert a share keeping its existing id.
    pub async fn insert_with_id<'e, E>(executor: E, share: &Share) -> AppResult<()>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query(
            "INSERT INTO resource_shares (id, resource_id, user_id, group_id) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(share.id)
        .bind(share.resource_id)
        .bind(share.target.user_id())
        .bind(share.target.group_id())
        .execute(executor)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to insert share {}", share.id),
                e,
            )
        })?;
        Ok(())
    }
}
