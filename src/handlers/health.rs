//! Health check handlers

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{db, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: String,
}

/// Health check endpoint; degrades when the database is unreachable
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match db::test_connection(state.db()).await {
        Ok(()) => "up",
        Err(_) => "down",
    };

    Json(HealthResponse {
        status: if database == "up" { "healthy" } else { "degraded" },
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
