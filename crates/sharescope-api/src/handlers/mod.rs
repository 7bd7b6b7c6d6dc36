//! Route handlers organized by domain.

pub mod access;
pub mod health;
pub mod report;

use crate::error::ApiError;
use sharescope_core::error::AppError;

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    AppError::not_found("route not found").into()
}
