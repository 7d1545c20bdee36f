use crate::Channel;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pending one-time code. Code and expiry always travel together;
/// the store enforces the same invariant with a CHECK constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOtp {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

/// User identity record owned by the credential store.
///
/// `login_name` is the identifier the user registered with and is the
/// lookup key for every auth operation. The classified channel decides
/// which of `email`/`phone` is populated and which verified flag the
/// OTP flow drives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub login_name: String,
    pub channel: Channel,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password_hash: String,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub otp: Option<PendingOtp>,
    /// Optimistic-concurrency counter for the OTP fields. Bumped on
    /// every issuance and consumption; stale writers lose.
    pub otp_version: i64,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(login_name: String, channel: Channel, password_hash: String) -> Self {
        let now = Utc::now();
        let (email, phone) = match channel {
            Channel::Email => (Some(login_name.clone()), None),
            Channel::Phone => (None, Some(login_name.clone())),
        };
        Self {
            id: Uuid::new_v4(),
            login_name,
            channel,
            email,
            phone,
            password_hash,
            email_verified: false,
            phone_verified: false,
            otp: None,
            otp_version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the registration channel has been verified.
    pub fn channel_verified(&self) -> bool {
        match self.channel {
            Channel::Email => self.email_verified,
            Channel::Phone => self.phone_verified,
        }
    }

    /// Address one-time codes are delivered to, if the user has one
    /// for their registration channel.
    pub fn otp_destination(&self) -> Option<&str> {
        match self.channel {
            Channel::Email => self.email.as_deref(),
            Channel::Phone => self.phone.as_deref(),
        }
    }
}
