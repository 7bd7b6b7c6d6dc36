//! # sharescope-entity
//!
//! Domain entity models for ShareScope. Every struct in this crate
//! represents a database table row or an aggregate row derived from one.
//! All entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database rows additionally derive `sqlx::FromRow`.

pub mod group;
pub mod report;
pub mod resource;
pub mod share;
pub mod user;

pub use group::{Group, GroupMembership};
pub use report::{
    ResourceUserCount, ResourceWithUserCount, UserResourceCount, UserWithResourceCount,
};
pub use resource::Resource;
pub use share::{NewShare, Share, ShareRecord, ShareTarget};
pub use user::User;
