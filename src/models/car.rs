//! Car model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Availability state of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "car_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    Available,
    Maintenance,
}

/// Gearbox type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "gearbox", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gearbox {
    Manual,
    Automatic,
}

/// Car database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Car {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub body_id: Uuid,
    pub country_id: Uuid,
    pub year: Option<i16>,
    pub seats: i16,
    pub gearbox: Option<Gearbox>,
    pub status: CarStatus,
    pub daily_rate: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    /// A car in maintenance is never rentable, regardless of dates
    pub fn is_rentable(&self) -> bool {
        self.status == CarStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn car(status: CarStatus) -> Car {
        Car {
            id: Uuid::new_v4(),
            brand_id: Uuid::new_v4(),
            body_id: Uuid::new_v4(),
            country_id: Uuid::new_v4(),
            year: Some(2020),
            seats: 5,
            gearbox: Some(Gearbox::Manual),
            status,
            daily_rate: dec!(45.99),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_maintenance_is_never_rentable() {
        assert!(car(CarStatus::Available).is_rentable());
        assert!(!car(CarStatus::Maintenance).is_rentable());
    }
}
