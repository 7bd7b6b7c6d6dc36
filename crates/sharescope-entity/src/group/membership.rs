//! Group membership link.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sharescope_core::types::{GroupId, UserId};

/// Places one user in one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembership {
    /// Member user.
    pub user_id: UserId,
    /// Containing group.
    pub group_id: GroupId,
}

impl GroupMembership {
    /// Create a membership link.
    pub fn new(user_id: impl Into<UserId>, group_id: impl Into<GroupId>) -> Self {
        Self {
            user_id: user_id.into(),
            group_id: group_id.into(),
        }
    }
}
