// src/leads.rs
//! Lead filter: heat, recency and keyword predicates over raw listing items.
//! Pure: "now" is an argument, nothing here reads a clock.

use chrono::{DateTime, Duration, Utc};

use crate::config::FilterSettings;
use crate::ingest::RawItem;

// A century; keeps the chrono duration in range for absurd configs.
const MAX_AGE_HOURS_CAP: u64 = 24 * 365 * 100;

/// A listing item that passed every predicate, projected for the digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub title: String,
    pub url: String,
    pub group: String,
    pub comments: u64,
}

#[derive(Debug, Clone)]
pub struct LeadFilter {
    keywords: Vec<String>, // lowercase
    min_comments: u64,
    max_age: Duration,
    base_url: String, // no trailing '/'
}

impl LeadFilter {
    pub fn new(settings: &FilterSettings, base_url: &str) -> Self {
        Self {
            keywords: settings
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            min_comments: settings.min_comments,
            max_age: Duration::hours(settings.max_age_hours.min(MAX_AGE_HOURS_CAP) as i64),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Inclusive: `comments == min_comments` passes.
    pub fn is_hot(&self, item: &RawItem) -> bool {
        item.comments >= self.min_comments
    }

    /// Inclusive at exactly `max_age`; items dated in the future always pass.
    pub fn is_recent(&self, item: &RawItem, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(item.created_at) <= self.max_age
    }

    /// Case-insensitive substring match of any keyword in title or body.
    pub fn matches_keyword(&self, item: &RawItem) -> bool {
        let title = item.title.to_lowercase();
        let body = item.body.to_lowercase();
        self.keywords
            .iter()
            .any(|k| title.contains(k.as_str()) || body.contains(k.as_str()))
    }

    pub fn accepts(&self, item: &RawItem, now: DateTime<Utc>) -> bool {
        // cheapest first
        self.is_hot(item) && self.is_recent(item, now) && self.matches_keyword(item)
    }

    pub fn lead_url(&self, permalink: &str) -> String {
        if permalink.starts_with('/') {
            format!("{}{}", self.base_url, permalink)
        } else {
            format!("{}/{}", self.base_url, permalink)
        }
    }

    /// Keeps listing order; no dedup, no ranking.
    pub fn apply(&self, items: &[RawItem], now: DateTime<Utc>) -> Vec<Lead> {
        items
            .iter()
            .filter(|it| self.accepts(it, now))
            .map(|it| Lead {
                title: it.title.clone(),
                url: self.lead_url(&it.permalink),
                group: it.group.clone(),
                comments: it.comments,
            })
            .collect()
    }
}
