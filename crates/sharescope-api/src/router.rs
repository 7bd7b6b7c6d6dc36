//! Route definitions for the ShareScope HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Middleware is applied in [`build_app`](crate::app::build_app).

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with every route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(access_routes())
        .merge(report_routes())
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Greeting and health check
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::hello))
        .route("/health", get(handlers::health::health))
}

/// Per-resource and per-user access resolution
fn access_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/resources/{id}/access-list",
            get(handlers::access::resource_access_list),
        )
        .route("/users/{id}/resources", get(handlers::access::user_resources))
}

/// Aggregate reports
fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reports/resources",
            get(handlers::report::resources_with_user_count),
        )
        .route(
            "/reports/users",
            get(handlers::report::users_with_resource_count),
        )
}
