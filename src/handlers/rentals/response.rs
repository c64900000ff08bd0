//! Rental response DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{CarStatus, Gearbox};

/// Rental row joined with its car, catalog names and client
#[derive(Debug, sqlx::FromRow)]
pub struct RentalDetail {
    pub id: Uuid,
    pub car_id: Uuid,
    pub brand: String,
    pub body: String,
    pub year: Option<i16>,
    pub seats: i16,
    pub gearbox: Option<Gearbox>,
    pub status: CarStatus,
    pub daily_rate: Decimal,
    pub country: String,
    pub client_id: Uuid,
    pub client_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cost: Decimal,
}

/// Car summary nested in a rental response
#[derive(Debug, Serialize)]
pub struct RentalCarSummary {
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

/// Client summary nested in a rental response
#[derive(Debug, Serialize)]
pub struct RentalClientSummary {
    pub id: Uuid,
    pub name: String,
}

/// Rental response with nested car and client summaries
#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub id: Uuid,
    pub car: RentalCarSummary,
    pub client: RentalClientSummary,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cost: Decimal,
}

impl From<RentalDetail> for RentalResponse {
    fn from(detail: RentalDetail) -> Self {
        Self {
            id: detail.id,
            car: RentalCarSummary {
                id: detail.car_id,
                brand: detail.brand,
                body: detail.body,
                year: detail.year,
                seats: detail.seats,
                gearbox: detail.gearbox,
                status: detail.status,
                daily_rate: detail.daily_rate,
                country: detail.country,
            },
            client: RentalClientSummary {
                id: detail.client_id,
                name: detail.client_name,
            },
            start_date: detail.start_date,
            end_date: detail.end_date,
            cost: detail.cost,
        }
    }
}
