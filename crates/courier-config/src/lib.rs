mod auth_config;
mod config;
mod database_config;
mod delivery_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use delivery_config::{DeliveryConfig, SmsConfig, SmtpConfig};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "courier.db";
const DEFAULT_LOG_DIRECTORY: &str = "log";

// Long-lived session token for a fully logged-in user (1000 hours) and
// the short-lived token handed out on bare OTP verification (10 hours).
const DEFAULT_SESSION_TTL_SECS: u64 = 1000 * 60 * 60;
const DEFAULT_VERIFY_TTL_SECS: u64 = 10 * 60 * 60;

const DEFAULT_OTP_LENGTH: u32 = 4;
const MIN_OTP_LENGTH: u32 = 4;
const MAX_OTP_LENGTH: u32 = 10;
const DEFAULT_OTP_TTL_SECS: u64 = 10 * 60;

const DEFAULT_DELIVERY_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SMTP_PORT: u16 = 587;

const MIN_JWT_SECRET_BYTES: usize = 32;

#[cfg(test)]
mod tests;
