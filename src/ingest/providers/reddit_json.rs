use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::config::ListingSettings;
use crate::error::FetchError;
use crate::ingest::listing::parse_listing;
use crate::ingest::types::{ListingSource, RawItem};

/// Single GET against the multi-subreddit `new.json` listing. No retry, no pagination.
pub struct RedditJsonProvider {
    url: String,
    client: Client,
}

impl RedditJsonProvider {
    pub fn new(settings: &ListingSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(&settings.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, header_value(&settings.accept_language)?);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("building listing http client")?;

        Ok(Self {
            url: settings.url.clone(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn header_value(raw: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(raw).with_context(|| format!("invalid request header value {raw:?}"))
}

#[async_trait]
impl ListingSource for RedditJsonProvider {
    async fn fetch_listing(&self) -> std::result::Result<Vec<RawItem>, FetchError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), provider = "reddit", "listing non-200");
            return Err(FetchError::from_status(status.as_u16()));
        }

        let body = resp.text().await.map_err(FetchError::Transport)?;
        let items = parse_listing(&body)?;
        tracing::debug!(count = items.len(), provider = "reddit", "listing parsed");
        Ok(items)
    }

    fn name(&self) -> &'static str {
        "reddit"
    }
}
