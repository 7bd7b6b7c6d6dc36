//! # sharescope-service
//!
//! The access resolution engine. Services answer "who can see this
//! resource", "what can this user see", and the two aggregate reports on top
//! of any [`AccessStore`](sharescope_database::AccessStore).
//!
//! Services follow constructor injection: the store is provided at
//! construction time as an `Arc<dyn AccessStore>`, and every service is
//! cheap to clone.

pub mod access;
pub mod dedup;
pub mod report;

pub use access::AccessService;
pub use report::ReportService;

#[cfg(test)]
pub(crate) mod testing;
