use crate::api::profile::profile_dto::ProfileDto;

use courier_core::{Profile, User};

use serde::Serialize;

/// Merged identity + profile view returned on a verified login
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub login_name: String,
    pub channel: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileDto>,
}

impl From<(User, Option<Profile>)> for UserDto {
    fn from((u, profile): (User, Option<Profile>)) -> Self {
        Self {
            id: u.id.to_string(),
            login_name: u.login_name,
            channel: u.channel.as_str().to_string(),
            email: u.email,
            phone: u.phone,
            email_verified: u.email_verified,
            phone_verified: u.phone_verified,
            created_at: u.created_at.timestamp(),
            profile: profile.map(ProfileDto::from),
        }
    }
}
