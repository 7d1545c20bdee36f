use crate::api::auth::user_dto::UserDto;

use serde::Serialize;

/// Login result. A verified channel yields `token` + `user`; an
/// unverified one yields `user_id` + `delivery` for the re-issued code.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<String>,
}

impl LoginResponse {
    pub fn verified(token: String, user: UserDto) -> Self {
        Self {
            verified: true,
            token: Some(token),
            user: Some(user),
            user_id: None,
            delivery: None,
        }
    }

    pub fn not_verified(user_id: String, delivery: String) -> Self {
        Self {
            verified: false,
            token: None,
            user: None,
            user_id: Some(user_id),
            delivery: Some(delivery),
        }
    }
}
