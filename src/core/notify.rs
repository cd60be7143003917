use crate::config::mail::MailConfig;
use crate::core::report;
use crate::domain::model::Report;
use crate::domain::ports::Notifier;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::path::PathBuf;

/// Sends the availability report over SMTP (STARTTLS) to the address named
/// in the mail configuration file. Sender and recipient are the same
/// mailbox; the subject repeats the report's summary sentence.
pub struct SmtpNotifier {
    config_path: PathBuf,
}

impl SmtpNotifier {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    fn build_message(config: &MailConfig, report: &Report) -> Result<Message> {
        let mailbox: Mailbox = config.mail.parse()?;
        let message = Message::builder()
            .from(mailbox.clone())
            .to(mailbox)
            .subject(report::summary_sentence(report.available_total))
            .header(ContentType::TEXT_PLAIN)
            .body(report.text.clone())?;
        Ok(message)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn deliver(&self, report: &Report) -> Result<()> {
        // The configuration file is read on each delivery attempt.
        let config = MailConfig::from_file(&self.config_path)?;
        config.validate()?;

        let message = Self::build_message(&config, report)?;

        tracing::debug!("connecting to SMTP relay {}:{}", config.host, config.port);
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        mailer.send(message).await?;
        tracing::info!("availability report sent to {}", config.mail);
        Ok(())
    }
}
