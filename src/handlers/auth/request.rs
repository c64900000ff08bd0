//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "The email does not have a valid format."))]
    pub email: String,

    #[validate(length(min = 1, message = "The password is mandatory."))]
    pub password: String,
}
