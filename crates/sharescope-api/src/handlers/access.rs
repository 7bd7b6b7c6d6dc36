//! Access resolution handlers.

use axum::Json;
use axum::extract::State;

use sharescope_core::error::AppError;
use sharescope_core::types::{ResourceId, UserId};
use sharescope_entity::resource::Resource;
use sharescope_entity::user::User;

use crate::error::ApiError;
use crate::extractors::PositiveId;
use crate::state::AppState;

/// GET /resources/{id}/access-list
pub async fn resource_access_list(
    State(state): State<AppState>,
    PositiveId(id): PositiveId,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .access_service
        .resource_access_list(ResourceId::new(id))
        .await?
        .ok_or_else(|| AppError::not_found("resource not found"))?;

    Ok(Json(users))
}

/// GET /users/{id}/resources
pub async fn user_resources(
    State(state): State<AppState>,
    PositiveId(id): PositiveId,
) -> Result<Json<Vec<Resource>>, ApiError> {
    let resources = state.access_service.user_resources(UserId::new(id)).await?;
    Ok(Json(resources))
}
