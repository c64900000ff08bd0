//! Car response DTOs

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Car, CarStatus, Gearbox, Rental};

/// Car row joined with its brand, body style and country names
#[derive(Debug, sqlx::FromRow)]
pub struct CarDetail {
    pub id: Uuid,
    pub brand: String,
    pub body: String,
    pub year: Option<i16>,
    pub seats: i16,
    pub gearbox: Option<Gearbox>,
    pub status: CarStatus,
    pub daily_rate: Decimal,
    pub country: String,
}

/// Car response with its booked periods
#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub id: Uuid,
    pub brand: String,
    pub body: String,
    pub year: Option<i16>,
    pub seats: i16,
    pub gearbox: Option<Gearbox>,
    pub status: CarStatus,
    pub daily_rate: Decimal,
    pub country: String,
    /// Rental periods as "start - end" date pairs
    pub rentals: Vec<String>,
}

impl CarResponse {
    pub fn new(car: CarDetail, rentals: Vec<Rental>) -> Self {
        Self {
            id: car.id,
            brand: car.brand,
            body: car.body,
            year: car.year,
            seats: car.seats,
            gearbox: car.gearbox,
            status: car.status,
            daily_rate: car.daily_rate,
            country: car.country,
            rentals: rentals
                .into_iter()
                .map(|r| format!("{} - {}", r.start_date, r.end_date))
                .collect(),
        }
    }
}

/// Plain car response (creation and updates, no joined names)
#[derive(Debug, Serialize)]
pub struct CarRecordResponse {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub body_id: Uuid,
    pub country_id: Uuid,
    pub year: Option<i16>,
    pub seats: i16,
    pub gearbox: Option<Gearbox>,
    pub status: CarStatus,
    pub daily_rate: Decimal,
}

impl From<Car> for CarRecordResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            brand_id: car.brand_id,
            body_id: car.body_id,
            country_id: car.country_id,
            year: car.year,
            seats: car.seats,
            gearbox: car.gearbox,
            status: car.status,
            daily_rate: car.daily_rate,
        }
    }
}
