//! # sharescope-database
//!
//! SQLite connection management, migrations, repositories, and the
//! [`AccessStore`](store::AccessStore) implementations the access engine
//! queries.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;
pub mod store;

pub use connection::DatabasePool;
pub use store::{AccessStore, MemoryAccessStore, Snapshot, SqlAccessStore};
