//! Car request DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::{CarStatus, Gearbox};

/// Create car request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    pub brand_id: Uuid,

    pub body_id: Uuid,

    pub country_id: Uuid,

    pub year: Option<i16>,

    pub seats: i16,

    pub gearbox: Option<Gearbox>,

    pub status: Option<CarStatus>,

    pub daily_rate: Decimal,
}

/// Update car request (absent fields are left unchanged)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCarRequest {
    pub brand_id: Option<Uuid>,

    pub body_id: Option<Uuid>,

    pub country_id: Option<Uuid>,

    pub year: Option<i16>,

    pub seats: Option<i16>,

    pub gearbox: Option<Gearbox>,

    pub status: Option<CarStatus>,

    pub daily_rate: Option<Decimal>,
}
