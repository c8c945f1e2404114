// src/notify/log.rs
use super::{Digest, MailTransport};
use crate::error::NotifyError;

/// Dry-run transport: writes the digest to the log instead of mailing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTransport;

#[async_trait::async_trait]
impl MailTransport for LogTransport {
    async fn deliver(&self, digest: &Digest) -> Result<(), NotifyError> {
        tracing::info!(
            subject = %digest.subject,
            leads = digest.lead_count,
            html = %digest.html,
            "dry run: digest not sent"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
