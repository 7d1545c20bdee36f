use super::{DeliveryError, OtpSender};

use courier_config::SmsConfig;

use async_trait::async_trait;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Sends one-time codes through the Twilio Messages API.
pub struct TwilioSmsSender {
    http: reqwest::Client,
    messages_url: String,
    account_sid: String,
    auth_token: String,
    from: String,
}

impl TwilioSmsSender {
    pub fn new(config: &SmsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            messages_url: format!(
                "{}/Accounts/{}/Messages.json",
                TWILIO_API_BASE, config.account_sid
            ),
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from: config.from_number.clone(),
        }
    }
}

#[async_trait]
impl OtpSender for TwilioSmsSender {
    async fn send(&self, destination: &str, code: &str) -> Result<(), DeliveryError> {
        let body = format!("Your verification code is {code}. It expires in 10 minutes.");
        let params = [
            ("To", destination),
            ("From", self.from.as_str()),
            ("Body", body.as_str()),
        ];

        let response = self
            .http
            .post(&self.messages_url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| DeliveryError::Failed {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DeliveryError::Failed {
                message: format!("SMS gateway returned {}", response.status()),
            });
        }

        Ok(())
    }
}
