//! Car body style request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create or rename a body style
#[derive(Debug, Deserialize, Validate)]
pub struct BodyStyleRequest {
    #[validate(length(min = 1, max = 255, message = "The name must be 1-255 characters."))]
    pub name: String,
}
