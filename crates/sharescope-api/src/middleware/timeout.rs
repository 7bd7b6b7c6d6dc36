//! Request timeout middleware.
//!
//! A request that outlives the configured limit is dropped and answered
//! with the standard internal error body.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use sharescope_core::config::ServerConfig;
use sharescope_core::error::AppError;

use crate::error::ApiError;

/// Per-request time limit taken from the server configuration.
pub fn request_limit(config: &ServerConfig) -> Duration {
    Duration::from_secs(config.request_timeout_seconds)
}

/// Runs the rest of the stack under `limit`.
pub async fn enforce_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(%method, %path, limit_ms = limit.as_millis() as u64, "Request timed out");
            ApiError::from(AppError::internal(format!(
                "request exceeded {}ms",
                limit.as_millis()
            )))
            .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::StatusCode;
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(limit: Duration) -> Router {
        Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    "done"
                }),
            )
            .route("/fast", get(|| async { "done" }))
            .layer(from_fn_with_state(limit, enforce_timeout))
    }

    async fn call(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_request_returns_internal_error_body() {
        let (status, bytes) = call(app(Duration::from_secs(5)), "/slow").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({
                "error": "INTERNAL_ERROR",
                "message": "internal server error, please try again."
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_request_passes_through() {
        let (status, bytes) = call(app(Duration::from_secs(5)), "/fast").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bytes, b"done");
    }

    #[test]
    fn test_limit_follows_config() {
        let config = ServerConfig {
            request_timeout_seconds: 7,
            ..ServerConfig::default()
        };
        assert_eq!(request_limit(&config), Duration::from_secs(7));
    }
}
