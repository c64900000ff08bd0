//! User handler implementations

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
    middleware::auth::{AuthenticatedUser, OptionalAuth},
    services::UserService,
    state::AppState,
};

use super::{
    request::{RegisterUserRequest, UpdateUserRequest},
    response::UserResponse,
};

/// Register a new user.
///
/// Open endpoint; a bearer token is only consulted when the payload asks
/// for a staff role.
pub async fn register(
    State(state): State<AppState>,
    OptionalAuth(requester): OptionalAuth,
    Json(payload): Json<RegisterUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    payload.validate()?;

    let user = UserService::register(
        state.db(),
        requester.as_ref(),
        &payload.name,
        &payload.email,
        &payload.password,
        payload.phone.as_deref(),
        payload.national_id.as_deref(),
        payload.role,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(user.into())),
    ))
}

/// The authenticated user's own account
pub async fn current_user(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserService::get(state.db(), &requester, &requester.id).await?;

    Ok(Json(DataResponse::new(user.into())))
}

/// List all users (staff only)
pub async fn list_users(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
) -> AppResult<Json<ListResponse<UserResponse>>> {
    let users = UserService::list(state.db(), &requester).await?;

    Ok(Json(ListResponse::new(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// Get a specific user by ID
pub async fn get_user(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserService::get(state.db(), &requester, &id).await?;

    Ok(Json(DataResponse::new(user.into())))
}

/// Update a user's account
pub async fn update_user(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    payload.validate()?;

    let user = UserService::update(
        state.db(),
        &requester,
        &id,
        payload.name.as_deref(),
        payload.email.as_deref(),
        payload.password.as_deref(),
        payload.phone.as_deref(),
        payload.national_id.as_deref(),
        payload.role,
    )
    .await?;

    Ok(Json(DataResponse::new(user.into())))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    UserService::delete(state.db(), &requester, &id).await?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
