use crate::{CoreError, ErrorLocation};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Communication channel a user registered through and receives
/// one-time codes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Phone,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Phone => "phone",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Channel::Email),
            "phone" => Ok(Channel::Phone),
            other => Err(CoreError::InvalidChannel {
                value: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
