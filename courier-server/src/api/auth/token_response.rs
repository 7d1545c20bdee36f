use crate::service::VerifiedOtp;

use serde::Serialize;

/// Token issued after successful code verification
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub channel: String,
}

impl From<VerifiedOtp> for TokenResponse {
    fn from(v: VerifiedOtp) -> Self {
        Self {
            token: v.token,
            channel: v.channel.as_str().to_string(),
        }
    }
}
