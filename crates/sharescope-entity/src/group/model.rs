//! Group entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sharescope_core::types::GroupId;

/// A named set of users. A share targeting a group reaches every member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Group {
    /// Unique group identifier.
    pub id: GroupId,
    /// Group name.
    pub name: String,
}

impl Group {
    /// Create a group value.
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
