//! Car body style handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::envelope::{DataResponse, ListResponse, MessageResponse},
    middleware::auth::AuthenticatedUser,
    services::CatalogService,
    state::AppState,
};

use super::{request::BodyStyleRequest, response::BodyStyleResponse};

/// List all body styles
pub async fn list_bodies(
    State(state): State<AppState>,
    _requester: AuthenticatedUser,
) -> AppResult<Json<ListResponse<BodyStyleResponse>>> {
    let bodies = CatalogService::list_bodies(state.db()).await?;

    Ok(Json(ListResponse::new(
        bodies.into_iter().map(BodyStyleResponse::from).collect(),
    )))
}

/// Get a specific body style by ID
pub async fn get_body(
    State(state): State<AppState>,
    _requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<BodyStyleResponse>>> {
    let body = CatalogService::get_body(state.db(), &id).await?;

    Ok(Json(DataResponse::new(body.into())))
}

/// Create a body style (staff only)
pub async fn create_body(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Json(payload): Json<BodyStyleRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<BodyStyleResponse>>)> {
    payload.validate()?;

    let body = CatalogService::create_body(state.db(), &requester, &payload.name).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(body.into()))))
}

/// Rename a body style (staff only)
pub async fn update_body(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<BodyStyleRequest>,
) -> AppResult<Json<DataResponse<BodyStyleResponse>>> {
    payload.validate()?;

    let body = CatalogService::update_body(state.db(), &requester, &id, &payload.name).await?;

    Ok(Json(DataResponse::new(body.into())))
}

/// Delete a body style (staff only)
pub async fn delete_body(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    CatalogService::delete_body(state.db(), &requester, &id).await?;

    Ok(Json(MessageResponse::new("Body style deleted successfully")))
}
