//! Raw `resource_shares` row and its conversion into [`Share`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sharescope_core::error::AppError;
use sharescope_core::types::{GroupId, ResourceId, ShareId, UserId};

use super::model::{Share, ShareTarget};

/// A `resource_shares` row as stored: two nullable target columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ShareRecord {
    /// Share identifier.
    pub id: ShareId,
    /// Shared resource.
    pub resource_id: ResourceId,
    /// Direct target, if any.
    pub user_id: Option<UserId>,
    /// Group target, if any.
    pub group_id: Option<GroupId>,
}

impl TryFrom<ShareRecord> for Share {
    type Error = AppError;

    fn try_from(record: ShareRecord) -> Result<Self, Self::Error> {
        let target = match (record.user_id, record.group_id) {
            (Some(user_id), None) => ShareTarget::User(user_id),
            (None, Some(group_id)) => ShareTarget::Group(group_id),
            (Some(_), Some(_)) => {
                return Err(AppError::validation(format!(
                    "share {} targets both a user and a group",
                    record.id
                )));
            }
            (None, None) => {
                return Err(AppError::validation(format!(
                    "share {} has no target",
                    record.id
                )));
            }
        };

        Ok(Share {
            id: record.id,
            resource_id: record.resource_id,
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user_id: Option<i64>, group_id: Option<i64>) -> ShareRecord {
        ShareRecord {
            id: ShareId(1),
            resource_id: ResourceId(5),
            user_id: user_id.map(UserId),
            group_id: group_id.map(GroupId),
        }
    }

    #[test]
    fn test_user_row_becomes_direct_share() {
        let share = Share::try_from(record(Some(2), None)).unwrap();
        assert_eq!(share.target, ShareTarget::User(UserId(2)));
        assert_eq!(share.target.user_id(), Some(UserId(2)));
        assert_eq!(share.target.group_id(), None);
    }

    #[test]
    fn test_group_row_becomes_group_share() {
        let share = Share::try_from(record(None, Some(2))).unwrap();
        assert_eq!(share.target, ShareTarget::Group(GroupId(2)));
    }

    #[test]
    fn test_rejects_row_with_both_targets() {
        let err = Share::try_from(record(Some(2), Some(2))).unwrap_err();
        assert!(err.message.contains("both"));
    }

    #[test]
    fn test_rejects_row_without_target() {
        assert!(Share::try_from(record(None, None)).is_err());
    }
}
