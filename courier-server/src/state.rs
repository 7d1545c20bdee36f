use crate::notifier::OtpDelivery;

use courier_auth::{CredentialHasher, TokenIssuer};
use courier_config::AuthConfig;

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
    pub hasher: Arc<CredentialHasher>,
    pub delivery: Arc<OtpDelivery>,
    pub policy: AuthPolicy,
}

/// Token and OTP policy knobs, resolved once from configuration.
#[derive(Clone, Copy)]
pub struct AuthPolicy {
    /// TTL of the session token issued on a verified login.
    pub session_ttl: Duration,
    /// TTL of the short token issued on bare OTP verification.
    pub verify_ttl: Duration,
    pub otp_length: u32,
    pub otp_ttl: chrono::Duration,
}

impl AuthPolicy {
    pub fn from_config(auth: &AuthConfig) -> Self {
        Self {
            session_ttl: Duration::from_secs(auth.session_ttl_secs),
            verify_ttl: Duration::from_secs(auth.verify_ttl_secs),
            otp_length: auth.otp_length,
            otp_ttl: chrono::Duration::seconds(auth.otp_ttl_secs as i64),
        }
    }
}
