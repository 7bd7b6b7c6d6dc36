//! Resource entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sharescope_core::types::ResourceId;

/// A shareable resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique resource identifier.
    pub id: ResourceId,
    /// Resource name.
    pub name: String,
    /// Visible to every user, regardless of shares.
    pub is_public: bool,
}

impl Resource {
    /// Create a resource visible only through shares.
    pub fn private(id: impl Into<ResourceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_public: false,
        }
    }

    /// Create a resource visible to every user.
    pub fn public(id: impl Into<ResourceId>, name: impl Into<String>) -> Self {
        Self {
            is_public: true,
            ..Self::private(id, name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_is_public_in_camel_case() {
        let json = serde_json::to_value(Resource::public(3, "Announcement")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 3, "name": "Announcement", "isPublic": true })
        );
    }
}
