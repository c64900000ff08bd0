//! Place request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create place request
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    #[validate(length(min = 1, max = 255, message = "The name must be 1-255 characters."))]
    pub name: String,

    pub description: Option<String>,

    #[validate(url(message = "The image url must be a valid URL."))]
    pub image_url: Option<String>,

    #[validate(url(message = "The web url must be a valid URL."))]
    pub web_url: Option<String>,

    #[validate(url(message = "The location url must be a valid URL."))]
    pub location_url: Option<String>,

    pub country_id: Uuid,
}

/// Update place request (absent fields are left unchanged)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    #[validate(length(min = 1, max = 255, message = "The name must be 1-255 characters."))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(url(message = "The image url must be a valid URL."))]
    pub image_url: Option<String>,

    #[validate(url(message = "The web url must be a valid URL."))]
    pub web_url: Option<String>,

    #[validate(url(message = "The location url must be a valid URL."))]
    pub location_url: Option<String>,

    pub country_id: Option<Uuid>,
}
