pub mod auth_service;
pub mod error;

pub use auth_service::{AuthService, DeliveryStatus, LoginOutcome, Registered, VerifiedOtp};
pub use error::{AuthFlowError, FieldViolation, Result};
