//! Rental booking handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Rental routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_rentals))
        .route("/", post(handler::create_rental))
        .route("/{id}", get(handler::get_rental))
        .route("/{id}", put(handler::update_rental))
        .route("/{id}", delete(handler::delete_rental))
}
