//! Place handler implementations

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

use super::{
    request::{CreatePlaceRequest, UpdatePlaceRequest},
    response::PlaceDetail,
};

/// List all places (public)
pub async fn list_places(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<PlaceDetail>>> {
    let places = CatalogService::list_places(state.db()).await?;

    Ok(Json(ListResponse::new(places)))
}

/// Get a specific place by ID (public)
pub async fn get_place(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<PlaceDetail>>> {
    let place = CatalogService::get_place(state.db(), &id).await?;

    Ok(Json(DataResponse::new(place)))
}

/// Create a place (staff only)
pub async fn create_place(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Json(payload): Json<CreatePlaceRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<PlaceDetail>>)> {
    payload.validate()?;

    let place = CatalogService::create_place(
        state.db(),
        &requester,
        &payload.name,
        payload.description.as_deref(),
        payload.image_url.as_deref(),
        payload.web_url.as_deref(),
        payload.location_url.as_deref(),
        &payload.country_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(place))))
}

/// Update a place (staff only)
pub async fn update_place(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePlaceRequest>,
) -> AppResult<Json<DataResponse<PlaceDetail>>> {
    payload.validate()?;

    let place = CatalogService::update_place(
        state.db(),
        &requester,
        &id,
        payload.name.as_deref(),
        payload.description.as_deref(),
        payload.image_url.as_deref(),
        payload.web_url.as_deref(),
        payload.location_url.as_deref(),
        payload.country_id.as_ref(),
    )
    .await?;

    Ok(Json(DataResponse::new(place)))
}

/// Delete a place (staff only)
pub async fn delete_place(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    CatalogService::delete_place(state.db(), &requester, &id).await?;

    Ok(Json(MessageResponse::new("Place deleted successfully")))
}
