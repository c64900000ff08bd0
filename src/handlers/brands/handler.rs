//! Car brand handler implementations

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

use super::{request::BrandRequest, response::BrandResponse};

/// List all brands
pub async fn list_brands(
    State(state): State<AppState>,
    _requester: AuthenticatedUser,
) -> AppResult<Json<ListResponse<BrandResponse>>> {
    let brands = CatalogService::list_brands(state.db()).await?;

    Ok(Json(ListResponse::new(
        brands.into_iter().map(BrandResponse::from).collect(),
    )))
}

/// Get a specific brand by ID
pub async fn get_brand(
    State(state): State<AppState>,
    _requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<BrandResponse>>> {
    let brand = CatalogService::get_brand(state.db(), &id).await?;

    Ok(Json(DataResponse::new(brand.into())))
}

/// Create a brand (staff only)
pub async fn create_brand(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Json(payload): Json<BrandRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<BrandResponse>>)> {
    payload.validate()?;

    let brand = CatalogService::create_brand(state.db(), &requester, &payload.name).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(brand.into()))))
}

/// Rename a brand (staff only)
pub async fn update_brand(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<BrandRequest>,
) -> AppResult<Json<DataResponse<BrandResponse>>> {
    payload.validate()?;

    let brand = CatalogService::update_brand(state.db(), &requester, &id, &payload.name).await?;

    Ok(Json(DataResponse::new(brand.into())))
}

/// Delete a brand (staff only)
pub async fn delete_brand(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    CatalogService::delete_brand(state.db(), &requester, &id).await?;

    Ok(Json(MessageResponse::new("Brand deleted successfully")))
}
