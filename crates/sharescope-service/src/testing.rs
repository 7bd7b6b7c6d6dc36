//! Shared fixtures for service tests.

use std::sync::Arc;

use async_trait::async_trait;

use sharescope_core::error::AppError;
use sharescope_core::result::AppResult;
use sharescope_core::types::{ResourceId, UserId};
use sharescope_database::{AccessStore, MemoryAccessStore, seed::demo_snapshot};
use sharescope_entity::report::{ResourceUserCount, UserResourceCount};
use sharescope_entity::resource::Resource;
use sharescope_entity::user::User;

pub fn demo_store() -> Arc<dyn AccessStore> {
    Arc::new(MemoryAccessStore::new(demo_snapshot()))
}

pub fn user_ids(users: &[User]) -> Vec<i64> {
    users.iter().map(|u| u.id.get()).collect()
}

/// A store whose every query fails.
pub struct FailingStore;

fn unavailable<T>() -> AppResult<T> {
    Err(AppError::database("store unavailable"))
}

#[async_trait]
impl AccessStore for FailingStore {
    async fn find_resource(&self, _id: ResourceId) -> AppResult<Option<Resource>> {
        unavailable()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        unavailable()
    }

    async fn list_resources(&self) -> AppResult<Vec<Resource>> {
        unavailable()
    }

    async fn count_users(&self) -> AppResult<i64> {
        unavailable()
    }

    async fn count_public_resources(&self) -> AppResult<i64> {
        unavailable()
    }

    async fn resource_access_list(&self, _id: ResourceId) -> AppResult<Vec<User>> {
        unavailable()
    }

    async fn user_resources(&self, _id: UserId) -> AppResult<Vec<Resource>> {
        unavailable()
    }

    async fn private_resource_user_counts(&self) -> AppResult<Vec<ResourceUserCount>> {
        unavailable()
    }

    async fn user_private_resource_counts(&self) -> AppResult<Vec<UserResourceCount>> {
        unavailable()
    }

    async fn health_check(&self) -> AppResult<()> {
        unavailable()
    }
}
