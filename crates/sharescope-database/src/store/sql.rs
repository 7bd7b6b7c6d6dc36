//! SQL-backed access store.

use async_trait::async_trait;
use sqlx::SqlitePool;

use sharescope_core::result::AppResult;
use sharescope_core::types::{ResourceId, UserId};
use sharescope_entity::report::{ResourceUserCount, UserResourceCount};
use sharescope_entity::resource::Resource;
use sharescope_entity::user::User;

use super::AccessStore;
use super::snapshot::Snapshot;
use crate::connection;
use crate::repositories::access::AccessRepository;
use crate::repositories::group::GroupRepository;
use crate::repositories::resource::ResourceRepository;
use crate::repositories::share::ShareRepository;
use crate::repositories::user::UserRepository;

/// Answers [`AccessStore`] queries against a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqlAccessStore {
    pool: SqlitePool,
    users: UserRepository,
    groups: GroupRepository,
    resources: ResourceRepository,
    shares: ShareRepository,
    access: AccessRepository,
}

impl SqlAccessStore {
    /// Create a store over a migrated pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            groups: GroupRepository::new(pool.clone()),
            resources: ResourceRepository::new(pool.clone()),
            shares: ShareRepository::new(pool.clone()),
            access: AccessRepository::new(pool.clone()),
            pool,
        }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Load every table into a [`Snapshot`], e.g. to build a
    /// [`MemoryAccessStore`](super::MemoryAccessStore) over the same data.
    pub async fn snapshot(&self) -> AppResult<Snapshot> {
        let (users, groups, memberships, resources, shares) = tokio::try_join!(
            self.users.find_all(),
            self.groups.find_all(),
            self.groups.find_memberships(),
            self.resources.find_all(),
            self.shares.find_all(),
        )?;

        Ok(Snapshot {
            users,
            groups,
            memberships,
            resources,
            shares,
        })
    }
}

#[async_trait]
impl AccessStore for SqlAccessStore {
    async fn find_resource(&self, id: ResourceId) -> AppResult<Option<Resource>> {
        self.resources.find_by_id(id).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    async fn list_resources(&self) -> AppResult<Vec<Resource>> {
        self.resources.find_all().await
    }

    async fn count_users(&self) -> AppResult<i64> {
        self.users.count().await
    }

    async fn count_public_resources(&self) -> AppResult<i64> {
        self.resources.count_public().await
    }

    async fn resource_access_list(&self, id: ResourceId) -> AppResult<Vec<User>> {
        self.access.users_for_resource(id).await
    }

    async fn user_resources(&self, id: UserId) -> AppResult<Vec<Resource>> {
        self.access.resources_for_user(id).await
    }

    async fn private_resource_user_counts(&self) -> AppResult<Vec<ResourceUserCount>> {
        self.access.private_resource_user_counts().await
    }

    async fn user_private_resource_counts(&self) -> AppResult<Vec<UserResourceCount>> {
        self.access.user_private_resource_counts().await
    }

    async fn health_check(&self) -> AppResult<()> {
        connection::health_check(&self.pool).await.map(|_| ())
    }
}
