//! Authentication middleware
//!
//! Bearer tokens are decoded once per request; handlers pick up the
//! requester through the [`AuthenticatedUser`] extractor (rejects with 401
//! when no valid token was presented) or [`OptionalAuth`] (never fails).

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, models::Role, services::AuthService, state::AppState};

/// Authenticated user extracted from a JWT bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Check whether the requester holds an administrative role
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthenticated)
    }
}

/// Optional authenticated user wrapper (never fails)
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(
            parts.extensions.get::<AuthenticatedUser>().cloned(),
        ))
    }
}

/// Resolve the requester identity from the Authorization header, if any.
///
/// Applied to the whole API surface; routes that require authentication
/// enforce it through the `AuthenticatedUser` extractor.
pub async fn auth_context_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(auth_header) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            match AuthService::verify_token(token, &state.config().jwt.secret) {
                Ok(claims) => match Uuid::parse_str(&claims.sub) {
                    Ok(user_id) => {
                        let user = AuthenticatedUser {
                            id: user_id,
                            name: claims.name,
                            role: claims.role,
                        };
                        request.extensions_mut().insert(user);
                    }
                    Err(e) => {
                        debug!(path = %request.uri().path(), error = ?e, "Invalid user id in token");
                    }
                },
                Err(e) => {
                    debug!(path = %request.uri().path(), error = ?e, "Token verification failed");
                }
            }
        }
    }

    next.run(request).await
}
