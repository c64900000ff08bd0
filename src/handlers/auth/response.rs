//! Authentication response DTOs

use serde::Serialize;

use crate::handlers::users::response::UserResponse;

/// Successful login response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}
