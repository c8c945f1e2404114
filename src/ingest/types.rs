// src/ingest/types.rs
use chrono::{DateTime, Utc};

use crate::error::FetchError;

/// One post from the source listing. Lives for a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub title: String,
    pub body: String, // empty when the post has no self text
    pub comments: u64,
    pub created_at: DateTime<Utc>,
    pub permalink: String, // relative, e.g. "/r/Entrepreneur/comments/abc/..."
    pub group: String,     // subreddit name
}

#[async_trait::async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_listing(&self) -> Result<Vec<RawItem>, FetchError>;
    fn name(&self) -> &'static str;
}
