//! Aggregate row models.
//!
//! The `*Count` rows come straight out of grouped store queries; the
//! `*With*Count` rows are the finished report lines.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sharescope_core::types::{ResourceId, UserId};

use crate::resource::Resource;
use crate::user::User;

/// Distinct users reaching one non-public resource through shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUserCount {
    /// The resource.
    pub resource_id: ResourceId,
    /// Number of distinct users with access.
    pub user_count: i64,
}

/// Distinct non-public resources one user reaches through shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserResourceCount {
    /// The user.
    pub user_id: UserId,
    /// Number of distinct non-public resources visible.
    pub resource_count: i64,
}

/// One line of the per-resource report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceWithUserCount {
    /// The resource.
    pub resource_id: ResourceId,
    /// Resource name.
    pub name: String,
    /// Whether the resource is public.
    pub is_public: bool,
    /// Number of distinct users who can see it.
    pub user_count: i64,
}

impl ResourceWithUserCount {
    /// Build a report line for a resource.
    pub fn new(resource: Resource, user_count: i64) -> Self {
        Self {
            resource_id: resource.id,
            name: resource.name,
            is_public: resource.is_public,
            user_count,
        }
    }
}

/// One line of the per-user report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithResourceCount {
    /// The user.
    pub user_id: UserId,
    /// User name.
    pub name: String,
    /// Number of distinct resources the user can see.
    pub resource_count: i64,
}

impl UserWithResourceCount {
    /// Build a report line for a user.
    pub fn new(user: User, resource_count: i64) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            resource_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines_use_camel_case_keys() {
        let line = ResourceWithUserCount::new(Resource::private(5, "Q3 Testing Plan"), 2);
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            serde_json::json!({
                "resourceId": 5,
                "name": "Q3 Testing Plan",
                "isPublic": false,
                "userCount": 2
            })
        );

        let line = UserWithResourceCount::new(User::new(5, "Eve"), 6);
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            serde_json::json!({ "userId": 5, "name": "Eve", "resourceCount": 6 })
        );
    }
}
