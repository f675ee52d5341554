use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::shared::config::EmailConfig;

use super::{EmailError, EmailMessage};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP mailer for the daily report: STARTTLS upgrade on the submission
/// port before authenticating.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
    recipients: Vec<String>,
}

impl SmtpMailer {
    /// Build from configuration. Every required setting (sender, credential,
    /// at least one recipient) must be present; anything missing fails fast.
    pub fn from_config(config: &EmailConfig) -> Result<Self, EmailError> {
        let sender = config
            .sender
            .clone()
            .ok_or(EmailError::MissingConfiguration("EMAIL_SENDER"))?;
        let password = config
            .password
            .clone()
            .ok_or(EmailError::MissingConfiguration("EMAIL_PASSWORD"))?;
        let recipients: Vec<String> = config
            .receivers
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();
        if recipients.is_empty() {
            return Err(EmailError::MissingConfiguration("EMAIL_RECEIVER"));
        }

        let host = config
            .smtp_host
            .clone()
            .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());
        let port = config.smtp_port.unwrap_or(DEFAULT_SMTP_PORT);

        let credentials = Credentials::new(sender.clone(), password);
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host)
            .map_err(|e| EmailError::Transport(e.to_string()))?
            .port(port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            sender,
            recipients,
        })
    }

    pub fn recipient_count(&self) -> usize {
        self.recipients.len()
    }

    /// Send one plaintext message to all configured recipients.
    /// Transport and authentication failures propagate; there is no retry.
    pub async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let mut builder = Message::builder()
            .from(
                self.sender
                    .parse()
                    .map_err(|_| EmailError::Address(self.sender.clone()))?,
            )
            .subject(&message.subject);

        for recipient in &self.recipients {
            builder = builder.to(recipient
                .parse()
                .map_err(|_| EmailError::Address(recipient.clone()))?);
        }

        let email = builder
            .header(ContentType::TEXT_PLAIN)
            .body(message.body_text.clone())
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> EmailConfig {
        EmailConfig {
            smtp_host: Some("smtp.example.com".to_string()),
            smtp_port: Some(587),
            sender: Some("reports@example.com".to_string()),
            password: Some("app-password".to_string()),
            receivers: Some("founder@example.com, ops@example.com".to_string()),
            dashboard_url: Some("https://dashboard.example.com".to_string()),
        }
    }

    #[test]
    fn builds_with_full_configuration() {
        let mailer = SmtpMailer::from_config(&full_config()).unwrap();
        assert_eq!(mailer.recipient_count(), 2);
    }

    #[test]
    fn each_missing_setting_fails_fast() {
        let mut config = full_config();
        config.sender = None;
        assert!(matches!(
            SmtpMailer::from_config(&config),
            Err(EmailError::MissingConfiguration("EMAIL_SENDER"))
        ));

        let mut config = full_config();
        config.password = None;
        assert!(matches!(
            SmtpMailer::from_config(&config),
            Err(EmailError::MissingConfiguration("EMAIL_PASSWORD"))
        ));

        let mut config = full_config();
        config.receivers = Some("  ,  ".to_string());
        assert!(matches!(
            SmtpMailer::from_config(&config),
            Err(EmailError::MissingConfiguration("EMAIL_RECEIVER"))
        ));
    }
}
