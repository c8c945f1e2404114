// src/pipeline.rs
//! One scout run: fetch the listing, filter it, mail the digest.

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::ScoutConfig;
use crate::error::{FetchError, NotifyError};
use crate::ingest::{ListingSource, RedditJsonProvider};
use crate::leads::{Lead, LeadFilter};
use crate::notify::{notify_leads, EmailSender, LogTransport, MailTransport, NotifyOutcome};

#[derive(Debug)]
pub enum Delivery {
    Skipped,
    Sent { leads: usize },
    /// Non-fatal: the run still counts as complete.
    Failed(NotifyError),
}

#[derive(Debug)]
pub struct RunReport {
    pub fetched: usize,
    pub leads: Vec<Lead>,
    pub delivery: Delivery,
}

pub struct Scout {
    source: Box<dyn ListingSource>,
    transport: Box<dyn MailTransport>,
    filter: LeadFilter,
}

impl Scout {
    pub fn new(
        source: Box<dyn ListingSource>,
        transport: Box<dyn MailTransport>,
        filter: LeadFilter,
    ) -> Self {
        Self {
            source,
            transport,
            filter,
        }
    }

    /// Real listing fetcher + SMTP (or log-only when `dry_run`).
    pub fn from_config(cfg: &ScoutConfig) -> Result<Self> {
        let source = RedditJsonProvider::new(&cfg.listing)?;
        let transport: Box<dyn MailTransport> = if cfg.dry_run {
            Box::new(LogTransport)
        } else {
            Box::new(EmailSender::new(&cfg.mail)?)
        };
        let filter = LeadFilter::new(&cfg.filter, &cfg.listing.base_url);
        Ok(Self::new(Box::new(source), transport, filter))
    }

    /// A fetch failure halts the run before filtering; a delivery failure is reported
    /// in the `RunReport` only.
    pub async fn run_once(&self, now: DateTime<Utc>) -> Result<RunReport, FetchError> {
        info!(source = self.source.name(), "scout is waking up");

        let items = match self.source.fetch_listing().await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, kind = e.kind().as_str(), source = self.source.name(), "fetch failed");
                return Err(e);
            }
        };
        info!(fetched = items.len(), "listing fetched");

        let leads = self.filter.apply(&items, now);
        for lead in &leads {
            info!(title = %lead.title, group = %lead.group, comments = lead.comments, "found lead");
        }

        let delivery = match notify_leads(self.transport.as_ref(), &leads).await {
            Ok(NotifyOutcome::Skipped) => {
                info!("no leads found this cycle");
                Delivery::Skipped
            }
            Ok(NotifyOutcome::Sent { leads }) => {
                info!(leads, transport = self.transport.name(), "email sent");
                Delivery::Sent { leads }
            }
            Err(e) => {
                warn!(error = %e, kind = e.kind().as_str(), "failed to send email");
                Delivery::Failed(e)
            }
        };

        Ok(RunReport {
            fetched: items.len(),
            leads,
            delivery,
        })
    }
}
