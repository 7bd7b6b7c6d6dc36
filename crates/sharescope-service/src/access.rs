//! Effective-access resolution for single resources and single users.

use std::sync::Arc;

use tracing::debug;

use sharescope_core::result::AppResult;
use sharescope_core::types::{ResourceId, UserId};
use sharescope_database::AccessStore;
use sharescope_entity::resource::Resource;
use sharescope_entity::user::User;

use crate::dedup::unique_by_key;

/// Resolves who can see a resource and what a user can see.
#[derive(Clone)]
pub struct AccessService {
    store: Arc<dyn AccessStore>,
}

impl std::fmt::Debug for AccessService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessService").finish_non_exhaustive()
    }
}

impl AccessService {
    /// Creates a new access service.
    pub fn new(store: Arc<dyn AccessStore>) -> Self {
        Self { store }
    }

    /// Users who can see a resource, ascending by id.
    ///
    /// Returns `Ok(None)` when the resource does not exist. A public resource
    /// is visible to every user, whatever its shares say.
    pub async fn resource_access_list(&self, id: ResourceId) -> AppResult<Option<Vec<User>>> {
        let Some(resource) = self.store.find_resource(id).await? else {
            debug!(resource_id = %id, "Resource not found");
            return Ok(None);
        };

        let users = if resource.is_public {
            self.store.list_users().await?
        } else {
            self.store.resource_access_list(id).await?
        };

        debug!(
            resource_id = %id,
            is_public = resource.is_public,
            users = users.len(),
            "Resolved access list"
        );
        Ok(Some(unique_by_key(users, |u| u.id)))
    }

    /// Resources a user can see, ascending by id.
    ///
    /// Unknown users see exactly the public resources.
    pub async fn user_resources(&self, id: UserId) -> AppResult<Vec<Resource>> {
        let resources = self.store.user_resources(id).await?;
        debug!(user_id = %id, resources = resources.len(), "Resolved user resources");
        Ok(unique_by_key(resources, |r| r.id))
    }
}
