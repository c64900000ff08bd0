//! Car body style model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Car body style database model (sedan, SUV, ...)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CarBody {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
