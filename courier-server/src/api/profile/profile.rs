//! Profile REST API handlers

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::{AuthenticatedUser, Json};
use crate::api::profile::profile_response::ProfileResponse;
use crate::api::profile::update_profile_request::UpdateProfileRequest;
use crate::service::FieldViolation;
use crate::state::AppState;

use courier_core::Profile;
use courier_db::ProfileRepository;

use std::panic::Location;

use axum::extract::State;
use chrono::{NaiveDate, Utc};
use error_location::ErrorLocation;

/// PUT /api/v1/profile
///
/// Upsert the caller's profile metadata row
pub async fn update_profile(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let dob = validate(&req)?;

    let repo = ProfileRepository::new(state.pool.clone());

    let mut profile = match repo.find_by_user(user_id).await? {
        Some(existing) => existing,
        None => Profile::new(user_id, req.first_name.clone()),
    };

    profile.first_name = req.first_name;
    profile.last_name = req.last_name;
    profile.dob = dob;
    profile.postal_code = req.postal_code;
    profile.locality = req.locality;
    profile.address = req.address;
    profile.city = req.city;
    profile.state = req.state;
    profile.about_me = req.about_me;
    profile.updated_at = Utc::now();

    repo.upsert(&profile).await?;

    Ok(Json(ProfileResponse {
        profile: profile.into(),
    }))
}

fn validate(req: &UpdateProfileRequest) -> ApiResult<Option<NaiveDate>> {
    let mut details = Vec::new();

    if req.first_name.trim().is_empty() {
        details.push(FieldViolation {
            field: "first_name",
            message: "must not be empty".to_string(),
        });
    }

    let dob = match req.dob {
        Some(ref raw) => match raw.parse::<NaiveDate>() {
            Ok(date) => Some(date),
            Err(_) => {
                details.push(FieldViolation {
                    field: "dob",
                    message: "must be an ISO date (YYYY-MM-DD)".to_string(),
                });
                None
            }
        },
        None => None,
    };

    if !details.is_empty() {
        return Err(ApiError::Validation {
            details,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(dob)
}
