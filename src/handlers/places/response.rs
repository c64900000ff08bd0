//! Place response DTOs

use serde::Serialize;
use uuid::Uuid;

/// Place row joined with its country name
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PlaceDetail {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub web_url: Option<String>,
    pub location_url: Option<String>,
    pub country: String,
}
