//! Car fleet handlers

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

/// Car routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_cars))
        .route("/", post(handler::create_car))
        .route("/{id}", get(handler::get_car))
        .route("/{id}", put(handler::update_car))
        .route("/{id}", delete(handler::delete_car))
}
