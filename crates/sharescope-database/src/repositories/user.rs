//! User repository implementation.

use sqlx::{SqliteExecutor, SqlitePool};

use sharescope_core::error::{AppError, ErrorKind};
use sharescope_core::result::AppResult;
use sharescope_entity::user::User;

/// Repository for user lookups and seeding writes.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every user in ascending id order.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT id, name FROM users ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Count all users.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }

    /// Insert a user through any executor (pool or open transaction).
    pub async fn insert<'e, E>(executor: E, user: &User) -> AppResult<()>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query("INSERT INTO users (id, name) VALUES (?, ?)")
            .bind(user.id)
            .bind(&user.name)
            .execute(executor)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert user", e))
    }
}
