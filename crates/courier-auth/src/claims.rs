use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims carried by every session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Build claims for a user with the given time-to-live. The TTL is
    /// supplied per issuance context: long for a full login session,
    /// short for a bare OTP verification.
    pub fn new(user_id: Uuid, ttl: Duration) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            exp: now + ttl.as_secs() as i64,
            iat: now,
        }
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Subject parsed back into a user id.
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a valid user id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
