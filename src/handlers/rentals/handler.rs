//! Rental handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::envelope::{DataResponse, ListResponse, MessageResponse},
    middleware::auth::AuthenticatedUser,
    services::RentalService,
    state::AppState,
};

use super::{
    request::{CreateRentalRequest, UpdateRentalRequest},
    response::RentalResponse,
};

/// List all rentals (staff only)
pub async fn list_rentals(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
) -> AppResult<Json<ListResponse<RentalResponse>>> {
    let rentals = RentalService::list(state.db(), &requester).await?;

    Ok(Json(ListResponse::new(
        rentals.into_iter().map(RentalResponse::from).collect(),
    )))
}

/// Book a car for a client
pub async fn create_rental(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Json(payload): Json<CreateRentalRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<RentalResponse>>)> {
    let rental = RentalService::create(
        state.db(),
        &requester,
        payload.car_id,
        payload.client_id,
        payload.start_date,
        payload.end_date,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(rental.into())),
    ))
}

/// Get a specific rental by ID
pub async fn get_rental(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<RentalResponse>>> {
    let rental = RentalService::get(state.db(), &requester, &id).await?;

    Ok(Json(DataResponse::new(rental.into())))
}

/// Update a rental's car or dates
pub async fn update_rental(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRentalRequest>,
) -> AppResult<Json<DataResponse<RentalResponse>>> {
    let rental = RentalService::update(
        state.db(),
        &requester,
        &id,
        payload.id,
        payload.client_id,
        payload.car_id,
        payload.start_date,
        payload.end_date,
    )
    .await?;

    Ok(Json(DataResponse::new(rental.into())))
}

/// Delete a rental
pub async fn delete_rental(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    RentalService::delete(state.db(), &requester, &id).await?;

    Ok(Json(MessageResponse::new("Rental deleted successfully")))
}
