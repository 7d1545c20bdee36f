use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_OTP_LENGTH, DEFAULT_OTP_TTL_SECS,
    DEFAULT_SESSION_TTL_SECS, DEFAULT_VERIFY_TTL_SECS, MAX_OTP_LENGTH, MIN_JWT_SECRET_BYTES,
    MIN_OTP_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required: there is deliberately no
    /// compiled-in fallback, a missing secret fails startup.
    pub jwt_secret: Option<String>,
    /// TTL of the session token issued on a verified login.
    pub session_ttl_secs: u64,
    /// TTL of the short token issued on bare OTP verification.
    pub verify_ttl_secs: u64,
    /// Digits per one-time code.
    pub otp_length: u32,
    /// Validity window of an issued one-time code.
    pub otp_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            verify_ttl_secs: DEFAULT_VERIFY_TTL_SECS,
            otp_length: DEFAULT_OTP_LENGTH,
            otp_ttl_secs: DEFAULT_OTP_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set it in config.toml or COURIER_AUTH_JWT_SECRET)",
                ));
            }
            Some(ref secret) if secret.len() < MIN_JWT_SECRET_BYTES => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_BYTES,
                    secret.len()
                )));
            }
            Some(_) => {}
        }

        if self.session_ttl_secs == 0 || self.verify_ttl_secs == 0 {
            return Err(ConfigError::auth(
                "auth.session_ttl_secs and auth.verify_ttl_secs must be > 0",
            ));
        }

        if self.otp_length < MIN_OTP_LENGTH || self.otp_length > MAX_OTP_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.otp_length must be {}-{}, got {}",
                MIN_OTP_LENGTH, MAX_OTP_LENGTH, self.otp_length
            )));
        }

        if self.otp_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.otp_ttl_secs must be > 0"));
        }

        Ok(())
    }
}
