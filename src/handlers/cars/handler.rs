//! Car handler implementations

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
    services::CarService,
    state::AppState,
};

use super::{
    request::{CreateCarRequest, UpdateCarRequest},
    response::{CarRecordResponse, CarResponse},
};

/// List all cars with their booked periods
pub async fn list_cars(
    State(state): State<AppState>,
    _requester: AuthenticatedUser,
) -> AppResult<Json<ListResponse<CarResponse>>> {
    let cars = CarService::list(state.db()).await?;

    Ok(Json(ListResponse::new(
        cars.into_iter()
            .map(|(car, rentals)| CarResponse::new(car, rentals))
            .collect(),
    )))
}

/// Get a specific car by ID
pub async fn get_car(
    State(state): State<AppState>,
    _requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<CarResponse>>> {
    let (car, rentals) = CarService::get(state.db(), &id).await?;

    Ok(Json(DataResponse::new(CarResponse::new(car, rentals))))
}

/// Add a car to the fleet (staff only)
pub async fn create_car(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Json(payload): Json<CreateCarRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CarRecordResponse>>)> {
    payload.validate()?;

    let car = CarService::create(
        state.db(),
        &requester,
        payload.brand_id,
        payload.body_id,
        payload.country_id,
        payload.year,
        payload.seats,
        payload.gearbox,
        payload.status,
        payload.daily_rate,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(car.into()))))
}

/// Update a car (staff only)
pub async fn update_car(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCarRequest>,
) -> AppResult<Json<DataResponse<CarRecordResponse>>> {
    payload.validate()?;

    let car = CarService::update(
        state.db(),
        &requester,
        &id,
        payload.brand_id,
        payload.body_id,
        payload.country_id,
        payload.year,
        payload.seats,
        payload.gearbox,
        payload.status,
        payload.daily_rate,
    )
    .await?;

    Ok(Json(DataResponse::new(car.into())))
}

/// Remove a car from the fleet (staff only)
pub async fn delete_car(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    CarService::delete(state.db(), &requester, &id).await?;

    Ok(Json(MessageResponse::new("Car deleted successfully")))
}
