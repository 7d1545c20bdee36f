use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A session token revoked before its natural expiry (logout).
///
/// `expires_at` is copied from the token's own expiry claim so the
/// record can be garbage-collected once the token would have died
/// anyway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: DateTime<Utc>,
}

impl RevokedToken {
    pub fn new(token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            token,
            expires_at,
            revoked_at: Utc::now(),
        }
    }
}
