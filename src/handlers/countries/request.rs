//! Country request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::models::{Continent, DrivingSide};

/// Create country request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCountryRequest {
    #[validate(length(min = 1, max = 255, message = "The name must be 1-255 characters."))]
    pub name: String,

    #[validate(length(max = 255, message = "The capital must be at most 255 characters."))]
    pub capital: Option<String>,

    #[validate(url(message = "The flag url must be a valid URL."))]
    pub flag_url: Option<String>,

    pub driving_side: Option<DrivingSide>,

    pub continent: Continent,
}

/// Update country request (absent fields are left unchanged)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCountryRequest {
    #[validate(length(min = 1, max = 255, message = "The name must be 1-255 characters."))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "The capital must be at most 255 characters."))]
    pub capital: Option<String>,

    #[validate(url(message = "The flag url must be a valid URL."))]
    pub flag_url: Option<String>,

    pub driving_side: Option<DrivingSide>,

    pub continent: Option<Continent>,
}
