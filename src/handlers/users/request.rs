//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::models::Role;

/// Register user request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 255, message = "The name must be 1-255 characters."))]
    pub name: String,

    #[validate(email(message = "The email does not have a valid format."))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "The password must be at least 8 characters."))]
    pub password: String,

    pub phone: Option<String>,

    pub national_id: Option<String>,

    /// Staff roles are only granted by an authenticated superadmin
    pub role: Option<Role>,
}

/// Update user request (absent fields are left unchanged)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255, message = "The name must be 1-255 characters."))]
    pub name: Option<String>,

    #[validate(email(message = "The email does not have a valid format."))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 128, message = "The password must be at least 8 characters."))]
    pub password: Option<String>,

    pub phone: Option<String>,

    pub national_id: Option<String>,

    /// Role changes are superadmin-only
    pub role: Option<Role>,
}
