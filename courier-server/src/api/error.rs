//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use crate::service::{AuthFlowError, FieldViolation};

use courier_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and per-field details
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "INVALID_OTP", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field-level violations for validation errors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldViolation>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {details:?} {location}")]
    Validation {
        details: Vec<FieldViolation>,
        location: ErrorLocation,
    },

    /// Registration against an existing login (409)
    #[error("Duplicate user {location}")]
    DuplicateUser { location: ErrorLocation },

    /// Unknown user or wrong password (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Wrong or missing one-time code (401)
    #[error("Invalid one-time code {location}")]
    InvalidOtp { location: ErrorLocation },

    /// One-time code past its validity window (401)
    #[error("One-time code expired {location}")]
    OtpExpired { location: ErrorLocation },

    /// No sender configured for the user's channel (400)
    #[error("Channel unsupported: {message} {location}")]
    ChannelUnsupported {
        message: String,
        location: ErrorLocation,
    },

    /// Bad signature, expired or revoked bearer token (401)
    #[error("Invalid token {location}")]
    InvalidToken { location: ErrorLocation },

    /// Concurrent OTP update lost the race (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    details: Vec::new(),
                },
            ),
            ApiError::Validation { details, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message: "One or more fields are invalid".into(),
                    details,
                },
            ),
            ApiError::DuplicateUser { .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "DUPLICATE_USER".into(),
                    message: "An account already exists for this identifier".into(),
                    details: Vec::new(),
                },
            ),
            ApiError::InvalidCredentials { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".into(),
                    message: "Invalid identifier or password".into(),
                    details: Vec::new(),
                },
            ),
            ApiError::InvalidOtp { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_OTP".into(),
                    message: "The verification code is not valid".into(),
                    details: Vec::new(),
                },
            ),
            ApiError::OtpExpired { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "OTP_EXPIRED".into(),
                    message: "The verification code has expired, request a new one".into(),
                    details: Vec::new(),
                },
            ),
            ApiError::ChannelUnsupported { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "CHANNEL_UNSUPPORTED".into(),
                    message,
                    details: Vec::new(),
                },
            ),
            ApiError::InvalidToken { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_TOKEN".into(),
                    message: "Authentication token is missing, invalid or revoked".into(),
                    details: Vec::new(),
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    details: Vec::new(),
                },
            ),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message: "Something went wrong".into(),
                    details: Vec::new(),
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert service flow errors to API errors
impl From<AuthFlowError> for ApiError {
    #[track_caller]
    fn from(e: AuthFlowError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthFlowError::Validation { violations } => ApiError::Validation {
                details: violations,
                location,
            },
            AuthFlowError::DuplicateUser => ApiError::DuplicateUser { location },
            AuthFlowError::InvalidCredentials => ApiError::InvalidCredentials { location },
            AuthFlowError::InvalidOtp => ApiError::InvalidOtp { location },
            AuthFlowError::OtpExpired => ApiError::OtpExpired { location },
            AuthFlowError::NotFound => ApiError::NotFound {
                message: "Account not found".into(),
                location,
            },
            // Deliberately the same envelope as an unknown account.
            AuthFlowError::Undeliverable => ApiError::NotFound {
                message: "Account not found".into(),
                location,
            },
            AuthFlowError::ChannelUnsupported { channel } => ApiError::ChannelUnsupported {
                message: format!("No {channel} delivery is configured on this server"),
                location,
            },
            AuthFlowError::InvalidToken => ApiError::InvalidToken { location },
            AuthFlowError::Conflict => ApiError::Conflict {
                message: "The code was updated concurrently, retry the request".into(),
                location,
            },
            AuthFlowError::Internal { message, .. } => ApiError::Internal { message, location },
        }
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
