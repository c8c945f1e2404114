// src/ingest/mod.rs
pub mod listing;
pub mod providers;
pub mod types;

pub use providers::reddit_json::RedditJsonProvider;
pub use types::{ListingSource, RawItem};
