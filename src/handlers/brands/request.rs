//! Car brand request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create or rename a brand
#[derive(Debug, Deserialize, Validate)]
pub struct BrandRequest {
    #[validate(length(min = 1, max = 255, message = "The name must be 1-255 characters."))]
    pub name: String,
}
