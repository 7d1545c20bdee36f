use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Email address or 10-digit phone number (required)
    pub identifier: String,

    /// Plaintext password (required)
    pub password: String,
}
