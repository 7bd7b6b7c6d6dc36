//! Share domain entities.

pub mod model;
pub mod record;

pub use model::{NewShare, Share, ShareTarget};
pub use record::ShareRecord;
