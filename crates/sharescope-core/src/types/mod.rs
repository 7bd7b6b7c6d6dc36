//! Core type definitions used across the ShareScope workspace.

pub mod id;

pub use id::*;
