//! Application builder and server lifecycle.

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_middleware;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use sharescope_core::config::AppConfig;
use sharescope_core::error::{AppError, ErrorKind};
use sharescope_database::{AccessStore, SqlAccessStore};

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::middleware::timeout::{enforce_timeout, request_limit};
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    build_router(state)
        .layer(axum_middleware::from_fn_with_state(
            request_limit(&config.server),
            enforce_timeout,
        ))
        .layer(build_compression_layer())
        .layer(build_cors_layer(&config.server.cors))
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
}

/// Serves the API over a migrated pool until Ctrl+C or SIGTERM, then closes
/// the pool.
pub async fn run_server(config: AppConfig, pool: SqlitePool) -> Result<(), AppError> {
    info!("Starting ShareScope server...");

    let store: Arc<dyn AccessStore> = Arc::new(SqlAccessStore::new(pool.clone()));
    let addr = config.server.bind_address();
    let app = build_app(AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!(%addr, "ShareScope server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("Server stopped, closing database pool");
    pool.close().await;
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use sharescope_database::{MemoryAccessStore, seed::demo_snapshot};
    use tower::ServiceExt;

    fn app() -> Router {
        let store = Arc::new(MemoryAccessStore::new(demo_snapshot()));
        build_app(AppState::new(AppConfig::default(), store))
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_hello() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"hello world!");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_access_list() {
        let (status, body) = get("/resources/5/access-list").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{ "id": 2, "name": "Bob" }, { "id": 3, "name": "Charlie" }])
        );
    }

    #[tokio::test]
    async fn test_access_list_not_found() {
        let (status, body) = get("/resources/999/access-list").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "error": "NOT_FOUND", "message": "resource not found" })
        );
    }

    #[tokio::test]
    async fn test_invalid_id() {
        let (status, body) = get("/users/abc/resources").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["issues"][0], "parameter 'id' must be a number");
    }

    #[tokio::test]
    async fn test_user_resources_shape() {
        let (status, body) = get("/users/4/resources").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0], json!({ "id": 3, "name": "Public Company Announcement", "isPublic": true }));
        assert_eq!(body.as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
