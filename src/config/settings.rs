// src/config/settings.rs
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const ENV_CONFIG_PATH: &str = "SCOUT_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/scout.toml";

pub const DEFAULT_LISTING_URL: &str =
    "https://www.reddit.com/r/Entrepreneur+freelance+marketing+solopreneur/new.json?limit=50";
pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";
// The origin blocks generic client identities; keep a browser-like UA.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; VampireScout/1.0; +http://creatoraiplaybook.co)";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "tax",
    "irs",
    "penalty",
    "safe harbor",
    "burnout",
    "overwhelmed",
    "drowning",
    "contract",
    "legal",
    "client",
];
pub const DEFAULT_MIN_COMMENTS: u64 = 5;
pub const DEFAULT_MAX_AGE_HOURS: u64 = 24;

pub const DEFAULT_SMTP_RELAY: &str = "smtp.gmail.com";
/// SMTPS (implicit TLS).
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// Tunables read from `config/scout.toml` (or `$SCOUT_CONFIG_PATH`).
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub listing: ListingSettings,
    pub filter: FilterSettings,
    pub mail: MailSettings,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListingSettings {
    pub url: String,
    pub base_url: String,
    pub user_agent: String,
    pub accept_language: String,
    /// `None` leaves the HTTP client's own default in place.
    pub timeout_secs: Option<u64>,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_LISTING_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub keywords: Vec<String>,
    pub min_comments: u64,
    pub max_age_hours: u64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            min_comments: DEFAULT_MIN_COMMENTS,
            max_age_hours: DEFAULT_MAX_AGE_HOURS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    pub relay: String,
    pub port: u16,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            relay: DEFAULT_SMTP_RELAY.to_string(),
            port: DEFAULT_SMTP_PORT,
        }
    }
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        let parsed: Settings = toml::from_str(s)?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.filter.keywords = clean_keywords(self.filter.keywords);
        self.listing.base_url = self.listing.base_url.trim_end_matches('/').to_string();
        self
    }
}

/// Load settings from an explicit path.
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Settings {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Settings::from_toml_str(&content).map_err(|e| ConfigError::Settings {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Load settings using env var + fallbacks:
/// 1) $SCOUT_CONFIG_PATH (must exist when set)
/// 2) config/scout.toml
/// 3) built-in defaults
pub fn load_settings_default() -> Result<Settings, ConfigError> {
    if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(&p);
        if pb.exists() {
            return load_settings_from(&pb);
        }
        return Err(ConfigError::Settings {
            path: p,
            reason: format!("{ENV_CONFIG_PATH} points to non-existent path"),
        });
    }
    let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
    if default_p.exists() {
        return load_settings_from(&default_p);
    }
    Ok(Settings::default())
}

/// Trim + lowercase, drop blanks and duplicates.
fn clean_keywords(items: Vec<String>) -> Vec<String> {
    use std::collections::BTreeSet;
    let mut set = BTreeSet::new();
    for it in items {
        let t = it.trim();
        if !t.is_empty() {
            set.insert(t.to_lowercase());
        }
    }
    set.into_iter().collect()
}
