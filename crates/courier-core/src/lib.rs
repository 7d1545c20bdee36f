pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::channel::Channel;
pub use models::profile::Profile;
pub use models::revoked_token::RevokedToken;
pub use models::user::{PendingOtp, User};
