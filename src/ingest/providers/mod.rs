pub mod reddit_json;
