//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. Expected domain outcomes (a taken username, a wrong password,
//! an item that does not exist under a given list) are NOT errors and never
//! appear here; they are modelled as enum variants on the service return
//! types. `AppError` covers the remaining, non-recoverable failures:
//! database faults, hashing faults, session read/write faults, plus the
//! not-found and validation responses the handlers surface directly.
//!
//! `AppError` implements `actix_web::error::ResponseError` so handlers can
//! bubble failures with `?` and still produce a well-formed HTTP response.

use actix_session::{SessionGetError, SessionInsertError};
use actix_web::{error::ResponseError, HttpResponse};
use std::fmt;
use validator::ValidationErrors;

/// Non-recoverable failures and direct HTTP error responses.
#[derive(Debug)]
pub enum AppError {
    /// A requested resource does not exist or is not visible to the caller
    /// (HTTP 404). Deliberately identical for "does not exist" and "owned by
    /// someone else".
    NotFound(String),
    /// An unexpected server-side fault (HTTP 500), e.g. password hashing or
    /// session serialization failing.
    InternalServerError(String),
    /// A fault reported by the backing store (HTTP 500). Wraps `sqlx` errors
    /// other than the unique-violation case the store maps to a typed
    /// outcome.
    DatabaseError(String),
    /// Failed input validation (HTTP 422).
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into plain-text `HttpResponse` objects.
///
/// The pages served by this application are HTML, so error bodies are plain
/// text rather than JSON. Store faults are reported to the client as a
/// generic internal error; the detail goes to the log only.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(msg) => HttpResponse::NotFound().body(msg.clone()),
            AppError::InternalServerError(msg) => {
                log::error!("internal error: {}", msg);
                HttpResponse::InternalServerError().body("internal server error")
            }
            AppError::DatabaseError(msg) => {
                log::error!("database error: {}", msg);
                HttpResponse::InternalServerError().body("internal server error")
            }
            AppError::ValidationError(msg) => {
                HttpResponse::UnprocessableEntity().body(msg.clone())
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// Password hashing failures are internal faults, never user errors.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(format!("Failed to hash password: {}", error))
    }
}

impl From<SessionInsertError> for AppError {
    fn from(error: SessionInsertError) -> AppError {
        AppError::InternalServerError(format!("Failed to write session: {}", error))
    }
}

impl From<SessionGetError> for AppError {
    fn from(error: SessionGetError) -> AppError {
        AppError::InternalServerError(format!("Failed to read session: {}", error))
    }
}
