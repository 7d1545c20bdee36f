use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    /// Display name (required)
    pub first_name: String,

    #[serde(default)]
    pub last_name: Option<String>,

    /// ISO date (YYYY-MM-DD)
    #[serde(default)]
    pub dob: Option<String>,

    #[serde(default)]
    pub postal_code: Option<String>,

    #[serde(default)]
    pub locality: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub about_me: Option<String>,
}
