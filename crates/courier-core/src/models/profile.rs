use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile metadata keyed by user id. Read by the auth service only to
/// compose the merged profile view returned on login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub dob: Option<NaiveDate>,
    pub postal_code: Option<String>,
    pub locality: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub about_me: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user_id: Uuid, first_name: String) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            first_name,
            last_name: None,
            dob: None,
            postal_code: None,
            locality: None,
            address: None,
            city: None,
            state: None,
            about_me: None,
            created_at: now,
            updated_at: now,
        }
    }
}
