//! In-memory access store over a [`Snapshot`].
//!
//! Grants are expanded share by share (a group share yields one grant per
//! member) and absorbed into ordered sets keyed by entity id, which gives
//! the same union semantics as the SQL queries.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;

use sharescope_core::result::AppResult;
use sharescope_core::types::{ResourceId, UserId};
use sharescope_entity::report::{ResourceUserCount, UserResourceCount};
use sharescope_entity::resource::Resource;
use sharescope_entity::share::ShareTarget;
use sharescope_entity::user::User;

use super::AccessStore;
use super::snapshot::Snapshot;

/// Answers [`AccessStore`] queries from an immutable snapshot.
#[derive(Debug, Clone)]
pub struct MemoryAccessStore {
    snapshot: Arc<Snapshot>,
}

impl MemoryAccessStore {
    /// Create a store over a snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// The snapshot this store reads.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Every `(resource, user)` grant implied by shares. May repeat pairs.
    fn grants(&self) -> impl Iterator<Item = (ResourceId, UserId)> + '_ {
        self.snapshot.shares.iter().flat_map(move |share| {
            let users: Vec<UserId> = match share.target {
                ShareTarget::User(user_id) => vec![user_id],
                ShareTarget::Group(group_id) => self.snapshot.members_of(group_id).collect(),
            };
            users
                .into_iter()
                .map(move |user_id| (share.resource_id, user_id))
        })
    }

    fn private_ids(&self) -> BTreeSet<ResourceId> {
        self.snapshot
            .resources
            .iter()
            .filter(|r| !r.is_public)
            .map(|r| r.id)
            .collect()
    }

    fn users_by_id(&self, ids: &BTreeSet<UserId>) -> Vec<User> {
        self.snapshot
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .map(|u| (u.id, u.clone()))
            .collect::<BTreeMap<_, _>>()
            .into_values()
            .collect()
    }
}

#[async_trait]
impl AccessStore for MemoryAccessStore {
    async fn find_resource(&self, id: ResourceId) -> AppResult<Option<Resource>> {
        Ok(self.snapshot.resources.iter().find(|r| r.id == id).cloned())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let mut users = self.snapshot.users.clone();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn list_resources(&self) -> AppResult<Vec<Resource>> {
        let mut resources = self.snapshot.resources.clone();
        resources.sort_by_key(|r| r.id);
        Ok(resources)
    }

    async fn count_users(&self) -> AppResult<i64> {
        Ok(self.snapshot.users.len() as i64)
    }

    async fn count_public_resources(&self) -> AppResult<i64> {
        Ok(self.snapshot.resources.iter().filter(|r| r.is_public).count() as i64)
    }

    async fn resource_access_list(&self, id: ResourceId) -> AppResult<Vec<User>> {
        let granted: BTreeSet<UserId> = self
            .grants()
            .filter(|(resource_id, _)| *resource_id == id)
            .map(|(_, user_id)| user_id)
            .collect();
        Ok(self.users_by_id(&granted))
    }

    async fn user_resources(&self, id: UserId) -> AppResult<Vec<Resource>> {
        let mut visible: BTreeSet<ResourceId> = self
            .snapshot
            .resources
            .iter()
            .filter(|r| r.is_public)
            .map(|r| r.id)
            .collect();
        visible.extend(
            self.grants()
                .filter(|(_, user_id)| *user_id == id)
                .map(|(resource_id, _)| resource_id),
        );

        let by_id: BTreeMap<ResourceId, &Resource> =
            self.snapshot.resources.iter().map(|r| (r.id, r)).collect();
        Ok(visible
            .into_iter()
            .filter_map(|rid| by_id.get(&rid).map(|r| (*r).clone()))
            .collect())
    }

    async fn private_resource_user_counts(&self) -> AppResult<Vec<ResourceUserCount>> {
        let private = self.private_ids();
        let mut per_resource: BTreeMap<ResourceId, BTreeSet<UserId>> = BTreeMap::new();
        for (resource_id, user_id) in self.grants().filter(|(r, _)| private.contains(r)) {
            per_resource.entry(resource_id).or_default().insert(user_id);
        }

        Ok(per_resource
            .into_iter()
            .map(|(resource_id, users)| ResourceUserCount {
                resource_id,
                user_count: users.len() as i64,
            })
            .collect())
    }

    async fn user_private_resource_counts(&self) -> AppResult<Vec<UserResourceCount>> {
        let private = self.private_ids();
        let mut per_user: BTreeMap<UserId, BTreeSet<ResourceId>> = BTreeMap::new();
        for (resource_id, user_id) in self.grants().filter(|(r, _)| private.contains(r)) {
            per_user.entry(user_id).or_default().insert(resource_id);
        }

        Ok(per_user
            .into_iter()
            .map(|(user_id, resources)| UserResourceCount {
                user_id,
                resource_count: resources.len() as i64,
            })
            .collect())
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_snapshot;
    use sharescope_core::types::ShareId;
    use sharescope_entity::share::Share;

    fn ids(users: &[User]) -> Vec<i64> {
        users.iter().map(|u| u.id.get()).collect()
    }

    #[tokio::test]
    async fn test_overlapping_grants_resolve_once() {
        let store = MemoryAccessStore::new(demo_snapshot());
        // Q3 Testing Plan: Bob directly and through Testers.
        let users = store.resource_access_list(ResourceId(5)).await.unwrap();
        assert_eq!(ids(&users), vec![2, 3]);
    }

    #[tokio::test]
    async fn test_group_share_expands_to_members() {
        let store = MemoryAccessStore::new(demo_snapshot());
        let users = store.resource_access_list(ResourceId(10)).await.unwrap();
        assert_eq!(ids(&users), vec![1, 2, 3, 5]);
    }

    #[tokio::test]
    async fn test_user_resources_include_public_once() {
        let store = MemoryAccessStore::new(demo_snapshot());
        // Alice: 1 direct, 2 and 10 via Developers, 9 direct and public,
        // 3/7/8 public.
        let resources = store.user_resources(UserId(1)).await.unwrap();
        let ids: Vec<i64> = resources.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 7, 8, 9, 10]);
    }

    #[tokio::test]
    async fn test_duplicate_share_rows_do_not_inflate_counts() {
        let mut snapshot = demo_snapshot();
        snapshot.shares.push(Share {
            id: ShareId(100),
            resource_id: ResourceId(5),
            target: ShareTarget::User(UserId(2)),
        });
        let store = MemoryAccessStore::new(snapshot);

        let counts = store.private_resource_user_counts().await.unwrap();
        let q3 = counts.iter().find(|c| c.resource_id == ResourceId(5)).unwrap();
        assert_eq!(q3.user_count, 2);

        let per_user = store.user_private_resource_counts().await.unwrap();
        let bob = per_user.iter().find(|c| c.user_id == UserId(2)).unwrap();
        assert_eq!(bob.resource_count, 3);
    }

    #[tokio::test]
    async fn test_private_counts_skip_public_and_unshared() {
        let store = MemoryAccessStore::new(demo_snapshot());
        let counts = store.private_resource_user_counts().await.unwrap();
        let resources: Vec<i64> = counts.iter().map(|c| c.resource_id.get()).collect();
        assert_eq!(resources, vec![1, 2, 5, 6, 10]);
    }

    #[tokio::test]
    async fn test_empty_snapshot() {
        let store = MemoryAccessStore::new(Snapshot::default());
        assert_eq!(store.count_users().await.unwrap(), 0);
        assert!(store.user_resources(UserId(1)).await.unwrap().is_empty());
        assert!(store.find_resource(ResourceId(1)).await.unwrap().is_none());
    }
}
