use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, DeliveryConfig, LoggingConfig,
    ServerConfig, SmsConfig, SmtpConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub delivery: DeliveryConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for COURIER_CONFIG_DIR env var, else use ./.courier/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply COURIER_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: COURIER_CONFIG_DIR env var > ./.courier/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("COURIER_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".courier"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.delivery.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.database.resolve(&Self::config_dir()?))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);

        info!(
            "  auth: session_ttl={}s, verify_ttl={}s, otp={} digits/{}s",
            self.auth.session_ttl_secs,
            self.auth.verify_ttl_secs,
            self.auth.otp_length,
            self.auth.otp_ttl_secs
        );

        info!(
            "  delivery: timeout={}s, email={}, sms={}",
            self.delivery.timeout_secs,
            if self.delivery.smtp.is_some() {
                "configured"
            } else {
                "disabled"
            },
            if self.delivery.sms.is_some() {
                "configured"
            } else {
                "disabled"
            },
        );

        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("COURIER_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("COURIER_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("COURIER_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("COURIER_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("COURIER_AUTH_SESSION_TTL_SECS", &mut self.auth.session_ttl_secs);
        Self::apply_env_parse("COURIER_AUTH_VERIFY_TTL_SECS", &mut self.auth.verify_ttl_secs);
        Self::apply_env_parse("COURIER_AUTH_OTP_LENGTH", &mut self.auth.otp_length);
        Self::apply_env_parse("COURIER_AUTH_OTP_TTL_SECS", &mut self.auth.otp_ttl_secs);

        // Delivery
        Self::apply_env_parse("COURIER_DELIVERY_TIMEOUT_SECS", &mut self.delivery.timeout_secs);
        self.apply_env_smtp();
        self.apply_env_sms();

        // Logging
        Self::apply_env_parse("COURIER_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("COURIER_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("COURIER_LOG_FILE", &mut self.logging.file);
    }

    /// SMTP can be configured entirely from the environment. Individual
    /// variables also override a TOML-provided block.
    fn apply_env_smtp(&mut self) {
        let has_any = ["COURIER_SMTP_HOST", "COURIER_SMTP_USERNAME"]
            .iter()
            .any(|v| std::env::var(v).is_ok());

        if self.delivery.smtp.is_none() && has_any {
            self.delivery.smtp = Some(SmtpConfig::default());
        }

        if let Some(ref mut smtp) = self.delivery.smtp {
            Self::apply_env_string("COURIER_SMTP_HOST", &mut smtp.host);
            Self::apply_env_parse("COURIER_SMTP_PORT", &mut smtp.port);
            Self::apply_env_string("COURIER_SMTP_USERNAME", &mut smtp.username);
            Self::apply_env_string("COURIER_SMTP_PASSWORD", &mut smtp.password);
            Self::apply_env_string("COURIER_SMTP_FROM_EMAIL", &mut smtp.from_email);
            Self::apply_env_option_string("COURIER_SMTP_FROM_NAME", &mut smtp.from_name);
        }
    }

    fn apply_env_sms(&mut self) {
        let has_any = ["COURIER_SMS_ACCOUNT_SID", "COURIER_SMS_AUTH_TOKEN"]
            .iter()
            .any(|v| std::env::var(v).is_ok());

        if self.delivery.sms.is_none() && has_any {
            self.delivery.sms = Some(SmsConfig::default());
        }

        if let Some(ref mut sms) = self.delivery.sms {
            Self::apply_env_string("COURIER_SMS_ACCOUNT_SID", &mut sms.account_sid);
            Self::apply_env_string("COURIER_SMS_AUTH_TOKEN", &mut sms.auth_token);
            Self::apply_env_string("COURIER_SMS_FROM_NUMBER", &mut sms.from_number);
        }
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
