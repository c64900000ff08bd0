//! Country model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Continent a country belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "continent", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Continent {
    Africa,
    America,
    Asia,
    Europe,
    Oceania,
}

/// Side of the road traffic drives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "driving_side", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DrivingSide {
    Left,
    Right,
}

/// Country database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Country {
    pub id: Uuid,
    pub name: String,
    pub capital: Option<String>,
    pub flag_url: Option<String>,
    pub driving_side: Option<DrivingSide>,
    pub continent: Continent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
