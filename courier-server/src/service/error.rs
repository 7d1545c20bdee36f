use courier_core::Channel;
use courier_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// One rejected input field. The register and reset flows enumerate
/// every violation in a single error instead of stopping at the first.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Outcomes of the authentication flows, one variant per distinguishable
/// failure the API exposes.
#[derive(Debug, Error)]
pub enum AuthFlowError {
    #[error("validation failed: {violations:?}")]
    Validation { violations: Vec<FieldViolation> },

    #[error("an account already exists for this identifier")]
    DuplicateUser,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid one-time code")]
    InvalidOtp,

    #[error("one-time code has expired")]
    OtpExpired,

    #[error("account not found")]
    NotFound,

    #[error("could not deliver a verification code to this identifier")]
    Undeliverable,

    #[error("no delivery configured for the {channel} channel")]
    ChannelUnsupported { channel: Channel },

    #[error("invalid or revoked token")]
    InvalidToken,

    #[error("concurrent code update, retry the request")]
    Conflict,

    #[error("internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthFlowError {
    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for AuthFlowError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        Self::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<courier_auth::AuthError> for AuthFlowError {
    #[track_caller]
    fn from(e: courier_auth::AuthError) -> Self {
        Self::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthFlowError>;
