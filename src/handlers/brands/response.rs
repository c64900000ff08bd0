//! Car brand response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::CarBrand;

/// Brand response
#[derive(Debug, Serialize)]
pub struct BrandResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<CarBrand> for BrandResponse {
    fn from(brand: CarBrand) -> Self {
        Self {
            id: brand.id,
            name: brand.name,
        }
    }
}
