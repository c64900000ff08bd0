//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("{0}")]
    Forbidden(String),

    // Validation errors
    #[error("{message}")]
    Validation {
        message: String,
        errors: FieldErrors,
    },

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Rental booking errors
    #[error("The car is not available for rental.")]
    CarUnavailable,

    #[error("The car is not available for the selected dates.")]
    DateConflict,

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Per-field validation messages, keyed by field name
#[derive(Debug, Default, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AppError {
    /// Build a 422 carrying the given field messages
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation {
            message: "The given data was invalid.".to_string(),
            errors,
        }
    }

    /// Build a 422 for a single offending field
    pub fn validation_field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut errors = FieldErrors::new();
        errors.add(field, message.clone());
        Self::Validation { message, errors }
    }

    /// Build a 422 with a message only (immutable-field attempts and similar)
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            errors: FieldErrors::new(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::CarUnavailable | Self::DateConflict => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body: `{"message": ...}` plus a field map on 422s
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "A database error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let errors = match self {
            AppError::Validation { errors, .. } if !errors.is_empty() => Some(errors),
            _ => None,
        };

        let body = ErrorResponse { message, errors };

        (status, Json(body)).into_response()
    }
}

// Implement From for common error types
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                // Uniqueness is pre-checked in services; this is the fallback
                if db_err.is_unique_violation() {
                    AppError::unprocessable("A record with those unique values already exists.")
                } else {
                    AppError::Database(db_err.to_string())
                }
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut errors = FieldErrors::new();
        for (field, failures) in err.field_errors() {
            for failure in failures {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {field} field is invalid."));
                errors.add(&field, message);
            }
        }
        AppError::validation(errors)
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_errors_map_to_bad_request() {
        assert_eq!(AppError::CarUnavailable.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::DateConflict.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_field_errors_accumulate() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());
        errors.add("car_id", "The selected car does not exist.");
        errors.add("car_id", "Another message.");
        assert!(!errors.is_empty());
        assert_eq!(errors.0["car_id"].len(), 2);
    }
}
