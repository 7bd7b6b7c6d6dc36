//! A full in-memory copy of the five access tables.

use serde::{Deserialize, Serialize};

use sharescope_core::types::{GroupId, UserId};
use sharescope_entity::group::{Group, GroupMembership};
use sharescope_entity::resource::Resource;
use sharescope_entity::share::Share;
use sharescope_entity::user::User;

/// Users, groups, memberships, resources, and shares as plain vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All users.
    pub users: Vec<User>,
    /// All groups.
    pub groups: Vec<Group>,
    /// All membership links.
    pub memberships: Vec<GroupMembership>,
    /// All resources.
    pub resources: Vec<Resource>,
    /// All shares.
    pub shares: Vec<Share>,
}

impl Snapshot {
    /// Members of a group.
    pub fn members_of(&self, group_id: GroupId) -> impl Iterator<Item = UserId> + '_ {
        self.memberships
            .iter()
            .filter(move |m| m.group_id == group_id)
            .map(|m| m.user_id)
    }
}
