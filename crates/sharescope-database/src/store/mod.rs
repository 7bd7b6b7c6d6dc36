//! The relational store the access engine reads from.
//!
//! [`AccessStore`] is the query surface. [`SqlAccessStore`] answers it with
//! declarative SQL and is the store the server and CLI run on.
//! [`MemoryAccessStore`] is a reference implementation that computes the
//! same answers with set algebra over a [`Snapshot`]. It backs the service
//! and router tests, and the SQL store is checked against it.

pub mod memory;
pub mod snapshot;
pub mod sql;

use async_trait::async_trait;

use sharescope_core::result::AppResult;
use sharescope_core::types::{ResourceId, UserId};
use sharescope_entity::report::{ResourceUserCount, UserResourceCount};
use sharescope_entity::resource::Resource;
use sharescope_entity::user::User;

pub use memory::MemoryAccessStore;
pub use snapshot::Snapshot;
pub use sql::SqlAccessStore;

/// Read-only queries over users, groups, resources, memberships, and shares.
///
/// List results are ordered by ascending id.
#[async_trait]
pub trait AccessStore: Send + Sync + 'static {
    /// Fetch one resource, or `None` if it does not exist.
    async fn find_resource(&self, id: ResourceId) -> AppResult<Option<Resource>>;

    /// Fetch all users.
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Fetch all resources.
    async fn list_resources(&self) -> AppResult<Vec<Resource>>;

    /// Size of the user population.
    async fn count_users(&self) -> AppResult<i64>;

    /// Number of public resources.
    async fn count_public_resources(&self) -> AppResult<i64>;

    /// Distinct users granted a resource through direct or group shares.
    async fn resource_access_list(&self, id: ResourceId) -> AppResult<Vec<User>>;

    /// Distinct resources visible to a user: direct shares, group shares,
    /// and every public resource.
    async fn user_resources(&self, id: UserId) -> AppResult<Vec<Resource>>;

    /// For every non-public resource with at least one grant, the number of
    /// distinct users with access.
    async fn private_resource_user_counts(&self) -> AppResult<Vec<ResourceUserCount>>;

    /// For every user with at least one grant, the number of distinct
    /// non-public resources they can see.
    async fn user_private_resource_counts(&self) -> AppResult<Vec<UserResourceCount>>;

    /// Check that the store can answer queries.
    async fn health_check(&self) -> AppResult<()>;
}
