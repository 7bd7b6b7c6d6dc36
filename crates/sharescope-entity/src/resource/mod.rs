//! Resource domain entities.

pub mod model;

pub use model::Resource;
