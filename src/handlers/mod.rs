//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod bodies;
pub mod brands;
pub mod cars;
pub mod countries;
pub mod envelope;
pub mod health;
pub mod places;
pub mod rentals;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(users::routes())
        .nest("/countries", countries::routes())
        .nest("/places", places::routes())
        .nest("/brands", brands::routes())
        .nest("/bodies", bodies::routes())
        .nest("/cars", cars::routes())
        .nest("/rentals", rentals::routes())
}
