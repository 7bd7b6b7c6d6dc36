//! Aggregate access report rows.

pub mod model;

pub use model::{
    ResourceUserCount, ResourceWithUserCount, UserResourceCount, UserWithResourceCount,
};
