// src/notify/mod.rs
pub mod digest;
pub mod email;
pub mod log;

use crate::error::NotifyError;
use crate::leads::Lead;
pub use digest::Digest;
pub use email::EmailSender;
pub use log::LogTransport;

/// Something that can deliver a composed digest. One call = one delivery attempt.
#[async_trait::async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, digest: &Digest) -> Result<(), NotifyError>;
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Nothing to report; the transport was not touched.
    Skipped,
    Sent { leads: usize },
}

/// Send one digest for `leads`, or do nothing when there are none.
pub async fn notify_leads(
    transport: &dyn MailTransport,
    leads: &[Lead],
) -> Result<NotifyOutcome, NotifyError> {
    if leads.is_empty() {
        return Ok(NotifyOutcome::Skipped);
    }
    let digest = Digest::compose(leads);
    transport.deliver(&digest).await?;
    Ok(NotifyOutcome::Sent { leads: leads.len() })
}
