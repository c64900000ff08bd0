//! User management handlers

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

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(handler::current_user))
        .route("/users", post(handler::register))
        .route("/users", get(handler::list_users))
        .route("/users/{id}", get(handler::get_user))
        .route("/users/{id}", put(handler::update_user))
        .route("/users/{id}", delete(handler::delete_user))
}
