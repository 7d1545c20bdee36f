pub mod channel;
pub mod profile;
pub mod revoked_token;
pub mod user;
