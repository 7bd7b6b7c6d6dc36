//! Resource repository implementation.

use sqlx::{SqliteExecutor, SqlitePool};

use sharescope_core::error::{AppError, ErrorKind};
use sharescope_core::result::AppResult;
use sharescope_core::types::ResourceId;
use sharescope_entity::resource::Resource;

/// Repository for resource lookups and seeding writes.
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    pool: SqlitePool,
}

impl ResourceRepository {
    /// Create a new resource repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a resource by primary key.
    pub async fn find_by_id(&self, id: ResourceId) -> AppResult<Option<Resource>> {
        sqlx::query_as::<_, Resource>("SELECT id, name, is_public FROM resources WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find resource by id", e)
            })
    }

    /// List every resource in ascending id order.
    pub async fn find_all(&self) -> AppResult<Vec<Resource>> {
        sqlx::query_as::<_, Resource>("SELECT id, name, is_public FROM resources ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list resources", e))
    }

    /// Count public resources.
    pub async fn count_public(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM resources WHERE is_public = 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count public resources", e)
            })
    }

    /// Insert a resource through any executor.
    pub async fn insert<'e, E>(executor: E, resource: &Resource) -> AppResult<()>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query("INSERT INTO resources (id, name, is_public) VALUES (?, ?, ?)")
            .bind(resource.id)
            .bind(&resource.name)
            .bind(resource.is_public)
            .execute(executor)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert resource", e))
    }
}
