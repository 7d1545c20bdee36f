pub mod profile_repository;
pub mod revoked_token_repository;
pub mod user_repository;
