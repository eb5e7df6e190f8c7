use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::auth::application::ports::outgoing::ResetMailer;

/// Transport seam so the adapter is testable without an SMTP server.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpResetMailer {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpResetMailer {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, String> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| e.to_string())?
            .credentials(creds)
            .build();

        Ok(Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
        })
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
        }
    }
}

#[async_trait]
impl ResetMailer for SmtpResetMailer {
    async fn send_reset_link(&self, to: &str, link: &str) -> Result<(), String> {
        let body = format!(
            "<p>A password reset was requested for your portfolio admin account.</p>\
             <p><a href=\"{link}\">Choose a new password</a></p>\
             <p>If this wasn't you, ignore this email. The link expires on its own.</p>"
        );

        let email = Message::builder()
            .from(self.from_email.parse().map_err(|e| format!("{e:?}"))?)
            .to(to.parse().map_err(|e| format!("{e:?}"))?)
            .subject("Reset your admin password")
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| e.to_string())?;

        self.mailer.send(email).await
    }
}
