//! Axum extractors for bearer-token authentication

use crate::api::error::ApiError;
use crate::service::AuthService;
use crate::state::AppState;

use std::future::Future;
use std::panic::Location;

use axum::http::HeaderMap;
use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Pulls the token out of `Authorization: Bearer <token>`. Absent or
/// malformed headers are "no token".
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Authenticated caller of a protected route.
///
/// Runs the full check: bearer header present, token not on the
/// blacklist, signature and expiry valid. Every failure is the same 401.
pub struct AuthenticatedUser(pub Uuid);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(token) = bearer_token(&parts.headers) else {
                return Err(ApiError::InvalidToken {
                    location: ErrorLocation::from(Location::caller()),
                });
            };

            let user_id = AuthService::new(state).authenticate(token).await?;

            Ok(AuthenticatedUser(user_id))
        }
    }
}
