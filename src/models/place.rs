//! Place model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Place database model (a point of interest within a country)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub web_url: Option<String>,
    pub location_url: Option<String>,
    pub country_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
