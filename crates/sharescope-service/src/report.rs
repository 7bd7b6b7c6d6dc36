//! Per-resource and per-user visibility reports.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use sharescope_core::result::AppResult;
use sharescope_database::AccessStore;
use sharescope_entity::report::{ResourceWithUserCount, UserWithResourceCount};

/// Builds the aggregate visibility reports.
#[derive(Clone)]
pub struct ReportService {
    store: Arc<dyn AccessStore>,
}

impl std::fmt::Debug for ReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportService").finish_non_exhaustive()
    }
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(store: Arc<dyn AccessStore>) -> Self {
        Self { store }
    }

    /// Every resource with the number of distinct users who can see it,
    /// ascending by resource id.
    ///
    /// Public resources count the whole user population; private resources
    /// count their distinct grantees, or zero.
    pub async fn resources_with_user_count(&self) -> AppResult<Vec<ResourceWithUserCount>> {
        let (total_users, resources, private_counts) = tokio::try_join!(
            self.store.count_users(),
            self.store.list_resources(),
            self.store.private_resource_user_counts(),
        )?;

        let counts: HashMap<_, _> = private_counts
            .into_iter()
            .map(|c| (c.resource_id, c.user_count))
            .collect();

        let report: Vec<_> = resources
            .into_iter()
            .map(|resource| {
                let user_count = if resource.is_public {
                    total_users
                } else {
                    counts.get(&resource.id).copied().unwrap_or(0)
                };
                ResourceWithUserCount::new(resource, user_count)
            })
            .collect();

        debug!(resources = report.len(), total_users, "Built resource report");
        Ok(report)
    }

    /// Every user with the number of distinct resources they can see,
    /// ascending by user id.
    ///
    /// The count is the number of public resources plus the user's distinct
    /// private grants.
    pub async fn users_with_resource_count(&self) -> AppResult<Vec<UserWithResourceCount>> {
        let (public_count, users, private_counts) = tokio::try_join!(
            self.store.count_public_resources(),
            self.store.list_users(),
            self.store.user_private_resource_counts(),
        )?;

        let counts: HashMap<_, _> = private_counts
            .into_iter()
            .map(|c| (c.user_id, c.resource_count))
            .collect();

        let report: Vec<_> = users
            .into_iter()
            .map(|user| {
                let private = counts.get(&user.id).copied().unwrap_or(0);
                UserWithResourceCount::new(user, public_count + private)
            })
            .collect();

        debug!(users = report.len(), public_count, "Built user report");
        Ok(report)
    }
}
