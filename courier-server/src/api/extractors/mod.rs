pub mod bearer;
pub mod json;

pub use bearer::{AuthenticatedUser, bearer_token};
pub use json::Json;
