use super::{DeliveryError, OtpSender};
use crate::error::{Result as ServerErrorResult, ServerError};

use courier_config::SmtpConfig;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};

/// Sends one-time codes over STARTTLS SMTP. The blocking lettre
/// transport runs on the blocking pool.
pub struct SmtpSender {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpSender {
    pub fn new(config: &SmtpConfig) -> ServerErrorResult<Self> {
        let from_header = match config.from_name {
            Some(ref name) => format!("{} <{}>", name, config.from_email),
            None => config.from_email.clone(),
        };
        let from: Mailbox = from_header.parse().map_err(|e| ServerError::Delivery {
            message: format!("invalid delivery.smtp.from_email: {e}"),
        })?;

        let transport = SmtpTransport::starttls_relay(&config.host)
            .map_err(|e| ServerError::Delivery {
                message: format!("SMTP relay setup failed for {}: {e}", config.host),
            })?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }

    fn body(code: &str) -> String {
        format!(
            "<html><body>\
             <p>Your verification code is:</p>\
             <h2>{code}</h2>\
             <p>The code is valid for 10 minutes. If you did not request it, ignore this message.</p>\
             </body></html>"
        )
    }
}

#[async_trait]
impl OtpSender for SmtpSender {
    async fn send(&self, destination: &str, code: &str) -> Result<(), DeliveryError> {
        let to: Mailbox = destination.parse().map_err(|e| DeliveryError::Failed {
            message: format!("invalid recipient address: {e}"),
        })?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Your verification code")
            .header(ContentType::TEXT_HTML)
            .body(Self::body(code))
            .map_err(|e| DeliveryError::Failed {
                message: format!("failed to build message: {e}"),
            })?;

        let transport = self.transport.clone();
        tokio::task::spawn_blocking(move || transport.send(&email))
            .await
            .map_err(|e| DeliveryError::Failed {
                message: format!("send task failed: {e}"),
            })?
            .map_err(|e| DeliveryError::Failed {
                message: e.to_string(),
            })?;

        Ok(())
    }
}
