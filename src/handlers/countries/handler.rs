//! Country handler implementations

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
    request::{CreateCountryRequest, UpdateCountryRequest},
    response::CountryResponse,
};

/// List all countries (public)
pub async fn list_countries(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<CountryResponse>>> {
    let countries = CatalogService::list_countries(state.db()).await?;

    Ok(Json(ListResponse::new(
        countries.into_iter().map(CountryResponse::from).collect(),
    )))
}

/// Get a specific country by ID (public)
pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<CountryResponse>>> {
    let country = CatalogService::get_country(state.db(), &id).await?;

    Ok(Json(DataResponse::new(country.into())))
}

/// Create a country (staff only)
pub async fn create_country(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Json(payload): Json<CreateCountryRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CountryResponse>>)> {
    payload.validate()?;

    let country = CatalogService::create_country(
        state.db(),
        &requester,
        &payload.name,
        payload.capital.as_deref(),
        payload.flag_url.as_deref(),
        payload.driving_side,
        payload.continent,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(country.into())),
    ))
}

/// Update a country (staff only)
pub async fn update_country(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCountryRequest>,
) -> AppResult<Json<DataResponse<CountryResponse>>> {
    payload.validate()?;

    let country = CatalogService::update_country(
        state.db(),
        &requester,
        &id,
        payload.name.as_deref(),
        payload.capital.as_deref(),
        payload.flag_url.as_deref(),
        payload.driving_side,
        payload.continent,
    )
    .await?;

    Ok(Json(DataResponse::new(country.into())))
}

/// Delete a country (staff only)
pub async fn delete_country(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    CatalogService::delete_country(state.db(), &requester, &id).await?;

    Ok(Json(MessageResponse::new("Country deleted successfully")))
}
