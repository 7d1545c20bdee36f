//! One-time code delivery
//!
//! Senders are dyn trait objects so tests can substitute a recording
//! sender without touching the service layer.

pub mod smtp;
pub mod twilio;

pub use smtp::SmtpSender;
pub use twilio::TwilioSmsSender;

use courier_core::Channel;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("no sender configured for {channel} delivery")]
    ChannelUnsupported { channel: Channel },

    #[error("delivery timed out after {0:?}")]
    Timeout(Duration),

    #[error("delivery failed: {message}")]
    Failed { message: String },
}

#[async_trait]
pub trait OtpSender: Send + Sync {
    async fn send(&self, destination: &str, code: &str) -> Result<(), DeliveryError>;
}

/// Routes one-time codes to the sender for the user's channel and
/// bounds every attempt with a timeout so delivery can never hang an
/// auth request.
pub struct OtpDelivery {
    email: Option<Arc<dyn OtpSender>>,
    sms: Option<Arc<dyn OtpSender>>,
    timeout: Duration,
}

impl OtpDelivery {
    pub fn new(
        email: Option<Arc<dyn OtpSender>>,
        sms: Option<Arc<dyn OtpSender>>,
        timeout: Duration,
    ) -> Self {
        Self {
            email,
            sms,
            timeout,
        }
    }

    pub fn supports(&self, channel: Channel) -> bool {
        self.sender_for(channel).is_some()
    }

    fn sender_for(&self, channel: Channel) -> Option<&Arc<dyn OtpSender>> {
        match channel {
            Channel::Email => self.email.as_ref(),
            Channel::Phone => self.sms.as_ref(),
        }
    }

    pub async fn send(
        &self,
        channel: Channel,
        destination: &str,
        code: &str,
    ) -> Result<(), DeliveryError> {
        let sender = self
            .sender_for(channel)
            .ok_or(DeliveryError::ChannelUnsupported { channel })?;

        match tokio::time::timeout(self.timeout, sender.send(destination, code)).await {
            Ok(result) => result,
            Err(_) => Err(DeliveryError::Timeout(self.timeout)),
        }
    }
}
