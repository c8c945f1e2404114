use anyhow::{Context, Result};
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::{authentication::Credentials, AsyncSmtpTransport};
use lettre::{AsyncTransport, Tokio1Executor};

use super::{Digest, MailTransport};
use crate::config::MailConfig;
use crate::error::NotifyError;

/// SMTPS sender. The account mails the digest to itself.
/// Without lettre's `pool` feature every `deliver` is its own connect/auth/send/quit session.
pub struct EmailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    account: Mailbox,
}

impl EmailSender {
    pub fn new(cfg: &MailConfig) -> Result<Self> {
        let creds = Credentials::new(cfg.username.clone(), cfg.password.clone());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.relay)
            .with_context(|| format!("invalid SMTP relay {}", cfg.relay))?
            .port(cfg.port)
            .credentials(creds)
            .build();

        Ok(Self {
            mailer,
            account: cfg.account.clone(),
        })
    }
}

pub fn build_message(account: &Mailbox, digest: &Digest) -> Result<Message, lettre::error::Error> {
    Message::builder()
        .from(account.clone())
        .to(account.clone())
        .subject(digest.subject.clone())
        .header(header::ContentType::TEXT_HTML)
        .body(digest.html.clone())
}

#[async_trait::async_trait]
impl MailTransport for EmailSender {
    async fn deliver(&self, digest: &Digest) -> std::result::Result<(), NotifyError> {
        let msg = build_message(&self.account, digest)?;
        self.mailer
            .send(msg)
            .await
            .map_err(|e| NotifyError::Delivery(anyhow::Error::new(e).context("send email")))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}
