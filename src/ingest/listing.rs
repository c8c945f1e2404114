// src/ingest/listing.rs
//! Wire format of the listing endpoint:
//! `{ data: { children: [ { data: { title, selftext?, num_comments, created_utc, permalink, subreddit } } ] } }`

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::FetchError;
use crate::ingest::types::RawItem;

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: Post,
}

#[derive(Debug, Deserialize)]
struct Post {
    title: String,
    #[serde(default)]
    selftext: Option<String>,
    num_comments: u64,
    created_utc: f64,
    permalink: String,
    subreddit: String,
}

/// Epoch seconds (possibly fractional) to UTC.
fn epoch_to_utc(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp(whole as i64, nanos)
}

/// Parse a listing body into raw items, in listing order.
pub fn parse_listing(body: &str) -> Result<Vec<RawItem>, FetchError> {
    let listing: Listing = serde_json::from_str(body)?;

    listing
        .data
        .children
        .into_iter()
        .map(|child| {
            let post = child.data;
            let created_at =
                epoch_to_utc(post.created_utc).ok_or_else(|| FetchError::Malformed {
                    reason: format!("created_utc out of range: {}", post.created_utc),
                })?;
            Ok(RawItem {
                title: post.title,
                body: post.selftext.unwrap_or_default(),
                comments: post.num_comments,
                created_at,
                permalink: post.permalink,
                group: post.subreddit,
            })
        })
        .collect()
}
