pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::revoked_token_repository::RevokedTokenRepository;
pub use repositories::user_repository::UserRepository;
