//! Place catalog handlers

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

/// Place routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_places))
        .route("/", post(handler::create_place))
        .route("/{id}", get(handler::get_place))
        .route("/{id}", put(handler::update_place))
        .route("/{id}", delete(handler::delete_place))
}
