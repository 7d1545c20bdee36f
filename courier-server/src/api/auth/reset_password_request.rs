use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub identifier: String,
    /// A valid, unexpired one-time code proving channel ownership
    pub code: String,
    pub new_password: String,
}
