//! Country catalog handlers

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

/// Country routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_countries))
        .route("/", post(handler::create_country))
        .route("/{id}", get(handler::get_country))
        .route("/{id}", put(handler::update_country))
        .route("/{id}", delete(handler::delete_country))
}
