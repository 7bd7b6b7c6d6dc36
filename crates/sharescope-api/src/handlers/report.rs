//! Aggregate report handlers.

use axum::Json;
use axum::extract::State;

use sharescope_entity::report::{ResourceWithUserCount, UserWithResourceCount};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /reports/resources
pub async fn resources_with_user_count(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResourceWithUserCount>>, ApiError> {
    Ok(Json(
        state.report_service.resources_with_user_count().await?,
    ))
}

/// GET /reports/users
pub async fn users_with_resource_count(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserWithResourceCount>>, ApiError> {
    Ok(Json(
        state.report_service.users_with_resource_count().await?,
    ))
}
