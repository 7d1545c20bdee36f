#![allow(dead_code)]

use chrono::{Duration, Utc};
use courier_core::{Channel, PendingOtp, Profile, RevokedToken, User};
use uuid::Uuid;

/// Creates an unverified email user with a pending code
pub fn create_test_user(login_name: &str) -> User {
    let mut user = User::new(
        login_name.to_string(),
        Channel::Email,
        "argon2-hash-placeholder".to_string(),
    );
    user.otp = Some(create_test_otp("1234"));
    user
}

pub fn create_test_otp(code: &str) -> PendingOtp {
    PendingOtp {
        code: code.to_string(),
        expires_at: Utc::now() + Duration::minutes(10),
    }
}

pub fn create_test_revoked_token(token: &str) -> RevokedToken {
    RevokedToken::new(token.to_string(), Utc::now() + Duration::hours(1))
}

pub fn create_test_profile(user_id: Uuid) -> Profile {
    let mut profile = Profile::new(user_id, "Test".to_string());
    profile.last_name = Some("Courier".to_string());
    profile.city = Some("Lagos".to_string());
    profile
}
