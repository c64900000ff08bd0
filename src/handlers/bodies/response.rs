//! Car body style response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::CarBody;

/// Body style response
#[derive(Debug, Serialize)]
pub struct BodyStyleResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<CarBody> for BodyStyleResponse {
    fn from(body: CarBody) -> Self {
        Self {
            id: body.id,
            name: body.name,
        }
    }
}
