//! Car brand handlers

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

/// Brand routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_brands))
        .route("/", post(handler::create_brand))
        .route("/{id}", get(handler::get_brand))
        .route("/{id}", put(handler::update_brand))
        .route("/{id}", delete(handler::delete_brand))
}
