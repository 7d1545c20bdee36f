pub mod claims;
pub mod error;
pub mod identity;
pub mod otp;
pub mod password;
pub mod token_issuer;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use identity::{Classification, classify};
pub use otp::OtpError;
pub use password::CredentialHasher;
pub use token_issuer::TokenIssuer;

#[cfg(test)]
mod tests;
