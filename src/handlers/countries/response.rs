//! Country response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::{Continent, Country, DrivingSide};

/// Country response
#[derive(Debug, Serialize)]
pub struct CountryResponse {
    pub id: Uuid,
    pub name: String,
    pub capital: Option<String>,
    pub flag_url: Option<String>,
    pub driving_side: Option<DrivingSide>,
    pub continent: Continent,
}

impl From<Country> for CountryResponse {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            name: country.name,
            capital: country.capital,
            flag_url: country.flag_url,
            driving_side: country.driving_side,
            continent: country.continent,
        }
    }
}
