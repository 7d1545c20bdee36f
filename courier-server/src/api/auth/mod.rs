pub mod auth;
pub mod login_request;
pub mod login_response;
pub mod message_response;
pub mod register_request;
pub mod register_response;
pub mod reset_password_request;
pub mod token_response;
pub mod user_dto;
pub mod verify_otp_request;
