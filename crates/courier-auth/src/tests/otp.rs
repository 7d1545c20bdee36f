use crate::otp::{self, OtpError};

use chrono::{Duration, Utc};
use courier_core::PendingOtp;

fn pending(code: &str, expires_in: Duration) -> PendingOtp {
    PendingOtp {
        code: code.to_string(),
        expires_at: Utc::now() + expires_in,
    }
}

#[test]
fn generate_produces_fixed_width_numeric_codes() {
    for _ in 0..50 {
        let code = otp::generate(4);
        assert_eq!(code.len(), 4);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    assert_eq!(otp::generate(6).len(), 6);
}

#[test]
fn matching_code_within_window_validates() {
    let p = pending("0420", Duration::minutes(10));

    assert_eq!(otp::validate(&p, "0420", Utc::now()), Ok(()));
}

#[test]
fn wrong_code_fails_with_mismatch_regardless_of_expiry() {
    let live = pending("1234", Duration::minutes(10));
    let dead = pending("1234", Duration::minutes(-10));

    assert_eq!(otp::validate(&live, "4321", Utc::now()), Err(OtpError::Mismatch));
    assert_eq!(otp::validate(&dead, "4321", Utc::now()), Err(OtpError::Mismatch));
}

#[test]
fn matching_code_after_expiry_fails_with_expired() {
    let p = pending("1234", Duration::minutes(-1));

    assert_eq!(otp::validate(&p, "1234", Utc::now()), Err(OtpError::Expired));
}

#[test]
fn comparison_is_exact_not_numeric() {
    // "0420" and "420" are different codes even though they are the
    // same number.
    let p = pending("0420", Duration::minutes(10));

    assert_eq!(otp::validate(&p, "420", Utc::now()), Err(OtpError::Mismatch));
}
