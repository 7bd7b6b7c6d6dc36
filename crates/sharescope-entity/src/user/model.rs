//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sharescope_core::types::UserId;

/// A user who may be granted visibility of resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
}

impl User {
    /// Create a user value.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
