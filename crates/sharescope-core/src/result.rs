//! Convenience result type alias for ShareScope.

use crate::error::AppError;

/// A specialized `Result` type for ShareScope operations.
pub type AppResult<T> = Result<T, AppError>;
