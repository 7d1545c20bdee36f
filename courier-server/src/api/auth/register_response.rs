use crate::service::Registered;

use serde::Serialize;

/// Successful registration acknowledgment
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: String,
    pub channel: String,
    /// "sent" or "failed"; delivery failure does not fail registration
    pub delivery: String,
}

impl From<Registered> for RegisterResponse {
    fn from(r: Registered) -> Self {
        Self {
            user_id: r.user_id.to_string(),
            channel: r.channel.as_str().to_string(),
            delivery: r.delivery.as_str().to_string(),
        }
    }
}
