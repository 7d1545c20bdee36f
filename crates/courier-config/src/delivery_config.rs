use crate::{ConfigError, ConfigErrorResult, DEFAULT_DELIVERY_TIMEOUT_SECS, DEFAULT_SMTP_PORT};

use serde::Deserialize;

/// One-time code delivery. Each channel is optional; an unconfigured
/// channel makes OTP issuance on that channel fail with a clear
/// channel-unsupported error instead of silently skipping delivery.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Upper bound on a single delivery attempt. Delivery must never
    /// hang an auth request indefinitely.
    pub timeout_secs: u64,
    pub smtp: Option<SmtpConfig>,
    pub sms: Option<SmsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    #[serde(default)]
    pub from_name: Option<String>,
}

/// Twilio-style SMS gateway credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct SmsConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

impl DeliveryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::delivery("delivery.timeout_secs must be > 0"));
        }

        if let Some(ref smtp) = self.smtp {
            if smtp.host.is_empty() {
                return Err(ConfigError::delivery("delivery.smtp.host must not be empty"));
            }
            if !smtp.from_email.contains('@') {
                return Err(ConfigError::delivery(format!(
                    "delivery.smtp.from_email is not an email address: {}",
                    smtp.from_email
                )));
            }
        }

        if let Some(ref sms) = self.sms
            && (sms.account_sid.is_empty() || sms.auth_token.is_empty() || sms.from_number.is_empty())
        {
            return Err(ConfigError::delivery(
                "delivery.sms requires account_sid, auth_token and from_number",
            ));
        }

        Ok(())
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_DELIVERY_TIMEOUT_SECS,
            smtp: None,
            sms: None,
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_SMTP_PORT,
            username: String::new(),
            password: String::new(),
            from_email: String::new(),
            from_name: None,
        }
    }
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
        }
    }
}
