//! Login identifier classification.
//!
//! Every identifier entering the auth flows is classified exactly once,
//! on write, and the result decides which delivery channel the OTP uses.

use courier_core::Channel;

use std::sync::LazyLock;

use regex::Regex;

// Conventional local@domain.tld shape; full RFC 5322 is a non-goal.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

// Exactly 10 decimal digits. Fixed regional policy, not configurable.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Email,
    Phone,
    Invalid,
}

impl Classification {
    pub fn channel(&self) -> Option<Channel> {
        match self {
            Classification::Email => Some(Channel::Email),
            Classification::Phone => Some(Channel::Phone),
            Classification::Invalid => None,
        }
    }
}

/// Classify a login identifier as an email address, a phone number, or
/// neither. Pure, total, and deterministic.
pub fn classify(input: &str) -> Classification {
    if EMAIL_RE.is_match(input) {
        Classification::Email
    } else if PHONE_RE.is_match(input) {
        Classification::Phone
    } else {
        Classification::Invalid
    }
}
