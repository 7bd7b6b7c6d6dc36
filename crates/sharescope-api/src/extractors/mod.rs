//! Custom Axum extractors.

pub mod path;

pub use path::{PositiveId, parse_positive_id};
