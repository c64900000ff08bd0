//! Authentication handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{error::AppResult, services::AuthService, state::AppState};

use super::{request::LoginRequest, response::AuthResponse};

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, token, expires_in) = AuthService::login(
        state.db(),
        state.config(),
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(Json(AuthResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: user.into(),
    }))
}
