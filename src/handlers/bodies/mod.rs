//! Car body style handlers

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

/// Body style routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_bodies))
        .route("/", post(handler::create_body))
        .route("/{id}", get(handler::get_body))
        .route("/{id}", put(handler::update_body))
        .route("/{id}", delete(handler::delete_body))
}
