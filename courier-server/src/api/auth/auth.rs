//! Authentication REST API handlers
//!
//! Thin adapters: each handler runs one `AuthService` flow and shapes
//! the outcome into a response DTO.

use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::login_response::LoginResponse;
use crate::api::auth::message_response::MessageResponse;
use crate::api::auth::register_request::RegisterRequest;
use crate::api::auth::register_response::RegisterResponse;
use crate::api::auth::reset_password_request::ResetPasswordRequest;
use crate::api::auth::token_response::TokenResponse;
use crate::api::auth::user_dto::UserDto;
use crate::api::auth::verify_otp_request::VerifyOtpRequest;
use crate::api::error::Result as ApiResult;
use crate::api::extractors::{Json, bearer_token};
use crate::service::{AuthService, LoginOutcome};
use crate::state::AppState;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};

/// POST /api/v1/auth/register
///
/// Create an account and send the first verification code
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let service = AuthService::new(&state);
    let registered = service.register(&req.identifier, &req.password).await?;

    Ok((StatusCode::CREATED, Json(registered.into())))
}

/// POST /api/v1/auth/login
///
/// Password login. An unverified channel gets a fresh code instead of
/// a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(&state);

    let response = match service.login(&req.identifier, &req.password).await? {
        LoginOutcome::Verified {
            token,
            user,
            profile,
        } => LoginResponse::verified(token, UserDto::from((user, profile))),
        LoginOutcome::NotVerified { user_id, delivery } => {
            LoginResponse::not_verified(user_id.to_string(), delivery.as_str().to_string())
        }
    };

    Ok(Json(response))
}

/// GET /api/v1/auth/resend-otp/{identifier}
///
/// Re-issue and redeliver a verification code
pub async fn resend_otp(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(&state);
    service.resend_otp(&identifier).await?;

    Ok(Json(MessageResponse::new("Verification code sent")))
}

/// POST /api/v1/auth/verify-otp
///
/// Consume a pending code; always answers with a fresh short-lived token
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(req): Json<VerifyOtpRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(&state);
    let verified = service.verify_otp(&req.identifier, &req.code).await?;

    Ok(Json(verified.into()))
}

/// POST /api/v1/auth/logout
///
/// Blacklist the presented token. Succeeds with or without one.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(&state);
    service.logout(bearer_token(&headers)).await;

    Ok(Json(MessageResponse::new("Logged out")))
}

/// POST /api/v1/auth/reset-password
///
/// Change the password, authorized by a valid one-time code
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(&state);
    service
        .reset_password(&req.identifier, &req.code, &req.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password updated")))
}
