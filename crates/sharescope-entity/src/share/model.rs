//! Share entity model.

use serde::{Deserialize, Serialize};

use sharescope_core::types::{GroupId, ResourceId, ShareId, UserId};

/// Who a share grants visibility to.
///
/// A share names exactly one target; the enum makes "both" and "neither"
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum ShareTarget {
    /// A direct grant to one user.
    User(UserId),
    /// A grant to every current member of a group.
    Group(GroupId),
}

impl ShareTarget {
    /// The target user, for direct shares.
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::User(id) => Some(*id),
            Self::Group(_) => None,
        }
    }

    /// The target group, for group shares.
    pub fn group_id(&self) -> Option<GroupId> {
        match self {
            Self::User(_) => None,
            Self::Group(id) => Some(*id),
        }
    }
}

/// A persisted grant of one resource to one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    /// Unique share identifier.
    pub id: ShareId,
    /// The shared resource.
    pub resource_id: ResourceId,
    /// The grantee.
    pub target: ShareTarget,
}

/// Data required to create a new share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShare {
    /// The resource to share.
    pub resource_id: ResourceId,
    /// The grantee.
    pub target: ShareTarget,
}

impl NewShare {
    /// Share a resource directly with a user.
    pub fn with_user(resource_id: impl Into<ResourceId>, user_id: impl Into<UserId>) -> Self {
        Self {
            resource_id: resource_id.into(),
            target: ShareTarget::User(user_id.into()),
        }
    }

    /// Share a resource with every member of a group.
    pub fn with_group(resource_id: impl Into<ResourceId>, group_id: impl Into<GroupId>) -> Self {
        Self {
            resource_id: resource_id.into(),
            target: ShareTarget::Group(group_id.into()),
        }
    }
}
