use courier_core::Profile;

use serde::Serialize;

/// Profile metadata DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub first_name: String,
    pub last_name: Option<String>,
    /// ISO date (YYYY-MM-DD)
    pub dob: Option<String>,
    pub postal_code: Option<String>,
    pub locality: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub about_me: Option<String>,
    pub updated_at: i64,
}

impl From<Profile> for ProfileDto {
    fn from(p: Profile) -> Self {
        Self {
            first_name: p.first_name,
            last_name: p.last_name,
            dob: p.dob.map(|d| d.to_string()),
            postal_code: p.postal_code,
            locality: p.locality,
            address: p.address,
            city: p.city,
            state: p.state,
            about_me: p.about_me,
            updated_at: p.updated_at.timestamp(),
        }
    }
}
