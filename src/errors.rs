// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Data operations produce these internally; the exported
/// repository functions log them and resolve to None instead of returning them.
/// Handlers use them to build HTTP responses.
#[derive(Error, Debug)]
pub enum LightBnbError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<sqlx::Error> for LightBnbError {
    fn from(e: sqlx::Error) -> Self {
        LightBnbError::DatabaseError(e.to_string())
    }
}

impl LightBnbError {
    fn error_code(&self) -> &'static str {
        match self {
            LightBnbError::NotFound(_) => "NOT_FOUND",
            LightBnbError::DatabaseError(_) => "DATABASE_ERROR",
            LightBnbError::UnknownColumn(_) => "UNKNOWN_COLUMN",
            LightBnbError::InvalidInput(_) => "INVALID_INPUT",
            LightBnbError::ValidationError(_) => "VALIDATION_ERROR",
        }
    }
}

/// Convert LightBnbError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for LightBnbError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            LightBnbError::NotFound(_) => StatusCode::NOT_FOUND,
            LightBnbError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LightBnbError::UnknownColumn(_) => StatusCode::BAD_REQUEST,
            LightBnbError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            LightBnbError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}
