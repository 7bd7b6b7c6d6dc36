//! Group domain entities.

pub mod membership;
pub mod model;

pub use membership::GroupMembership;
pub use model::Group;
