pub mod templates;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::models::Submission;

/// Outbound notification mailer. Only constructed when SMTP credentials
/// and a destination address are configured.
pub struct Notifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl Notifier {
    pub fn new(config: &SmtpConfig, from: String, to: String) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        }
        .map_err(|e| format!("SMTP error: {e}"))?;

        let transport = builder.port(config.port).credentials(creds).build();

        Ok(Self {
            transport,
            from,
            to,
        })
    }

    /// Send the new-task notification for an accepted submission.
    pub async fn send_task_received(&self, submission: &Submission) -> Result<(), String> {
        let subject = format!(
            "New TaskAid Task: {} ({})",
            submission.title, submission.suburb
        );
        let text = templates::render_task_received(submission);
        self.send(&subject, &text).await
    }

    async fn send(&self, subject: &str, text_body: &str) -> Result<(), String> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(self
                .to
                .parse()
                .map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(text_body.to_string())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}
