//! One-time code generation and validation.

use courier_core::PendingOtp;

use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;

/// Why a submitted code was rejected. These are domain outcomes the
/// user can act on, not faults.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OtpError {
    #[error("one-time code does not match")]
    Mismatch,

    #[error("one-time code has expired")]
    Expired,
}

/// Generate a fixed-width numeric code, each digit drawn independently
/// and uniformly from 0-9. Leading zeros are kept.
///
/// Uses the thread-local PRNG, not a CSPRNG. Known weakness, accepted
/// for a short-lived low-stakes code; do not reuse for anything with a
/// longer validity window.
pub fn generate(length: u32) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// Check a submitted code against the pending one.
///
/// Mismatch wins over expiry: a wrong code is rejected as `Mismatch`
/// regardless of how old the stored code is. Validation does not
/// consume the code; the caller must clear it (atomically with the
/// verified-flag update) on success or the same code stays replayable.
pub fn validate(pending: &PendingOtp, submitted: &str, now: DateTime<Utc>) -> Result<(), OtpError> {
    if pending.code != submitted {
        return Err(OtpError::Mismatch);
    }

    if now > pending.expires_at {
        return Err(OtpError::Expired);
    }

    Ok(())
}
