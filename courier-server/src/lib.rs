pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod notifier;
pub mod routes;
pub mod service;
pub mod state;

pub use api::{
    auth::{
        auth::{login, logout, register, resend_otp, reset_password, verify_otp},
        login_request::LoginRequest,
        login_response::LoginResponse,
        message_response::MessageResponse,
        register_request::RegisterRequest,
        register_response::RegisterResponse,
        reset_password_request::ResetPasswordRequest,
        token_response::TokenResponse,
        user_dto::UserDto,
        verify_otp_request::VerifyOtpRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{AuthenticatedUser, Json},
    profile::{
        profile::update_profile, profile_dto::ProfileDto, profile_response::ProfileResponse,
        update_profile_request::UpdateProfileRequest,
    },
};

pub use crate::notifier::{DeliveryError, OtpDelivery, OtpSender, SmtpSender, TwilioSmsSender};
pub use crate::routes::build_router;
pub use crate::service::{AuthFlowError, AuthService, LoginOutcome};
pub use crate::state::{AppState, AuthPolicy};

#[cfg(test)]
mod tests;
