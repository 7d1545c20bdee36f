use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub identifier: String,
    /// The one-time code exactly as delivered, leading zeros included
    pub code: String,
}
