//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use sharescope_core::error::{AppError, ErrorKind};

/// Message returned for every infrastructure fault.
pub const INTERNAL_MESSAGE: &str = "internal server error, please try again.";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// An [`AppError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ApiErrorResponse) {
        let err = &self.0;
        match err.kind {
            ErrorKind::Validation => {
                let (message, details) = match &err.field {
                    Some(field) => (
                        format!("invalid '{field}' parameter"),
                        Some(serde_json::json!({
                            "field": field,
                            "issues": [err.message],
                        })),
                    ),
                    None => (err.message.clone(), None),
                };
                (
                    StatusCode::BAD_REQUEST,
                    ApiErrorResponse {
                        error: "VALIDATION_ERROR".to_string(),
                        message,
                        details,
                    },
                )
            }
            kind if kind.is_fault() => {
                tracing::error!(
                    kind = %err.kind,
                    error = %err.message,
                    source = ?err.source,
                    "Internal server error"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorResponse {
                        error: "INTERNAL_ERROR".to_string(),
                        message: INTERNAL_MESSAGE.to_string(),
                        details: None,
                    },
                )
            }
            _ => (
                StatusCode::NOT_FOUND,
                ApiErrorResponse {
                    error: "NOT_FOUND".to_string(),
                    message: err.message.clone(),
                    details: None,
                },
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}
