//! # sharescope-api
//!
//! HTTP API layer for ShareScope built on Axum.
//!
//! Provides the access and report endpoints, health checks, middleware
//! (request logging, CORS, compression, timeouts), path extractors, and the
//! mapping from [`AppError`](sharescope_core::AppError) to JSON error bodies.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
