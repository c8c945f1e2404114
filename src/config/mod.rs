// src/config/mod.rs
//! Process configuration: tunables from `settings`, mail secrets from the environment.
//! Built once in `main` and handed down; nothing below reads the environment itself.

pub mod settings;

use lettre::message::Mailbox;
use std::fmt;

use crate::error::ConfigError;
pub use settings::{FilterSettings, ListingSettings, MailSettings, Settings};

pub const ENV_EMAIL_USER: &str = "EMAIL_USER";
pub const ENV_EMAIL_PASSWORD: &str = "EMAIL_PASSWORD";
pub const ENV_DRY_RUN: &str = "SCOUT_DRY_RUN";

/// SMTP account. The digest is sent from the account to itself.
#[derive(Clone)]
pub struct MailConfig {
    pub relay: String,
    pub port: u16,
    pub account: Mailbox,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("relay", &self.relay)
            .field("port", &self.port)
            .field("account", &self.account.to_string())
            .field("password", &"<redacted>")
            .finish()
    }
}

impl MailConfig {
    /// `lookup` resolves variable names; `std::env::var` in production.
    pub fn from_lookup<F>(settings: &MailSettings, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = required(&lookup, ENV_EMAIL_USER)?;
        let password = required(&lookup, ENV_EMAIL_PASSWORD)?;
        let account: Mailbox = username.parse().map_err(|e: lettre::address::AddressError| {
            ConfigError::InvalidVar {
                name: ENV_EMAIL_USER,
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            relay: settings.relay.clone(),
            port: settings.port,
            account,
            username,
            password,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar { name })
}

fn flag_enabled(raw: Option<String>) -> bool {
    raw.is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

#[derive(Debug, Clone)]
pub struct ScoutConfig {
    pub listing: ListingSettings,
    pub filter: FilterSettings,
    pub mail: MailConfig,
    pub dry_run: bool,
}

impl ScoutConfig {
    /// Settings file (see [`settings::load_settings_default`]) plus process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = settings::load_settings_default()?;
        Self::from_parts(settings, |k| std::env::var(k).ok())
    }

    pub fn from_parts<F>(settings: Settings, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mail = MailConfig::from_lookup(&settings.mail, &lookup)?;
        let dry_run = settings.dry_run || flag_enabled(lookup(ENV_DRY_RUN));
        Ok(Self {
            listing: settings.listing,
            filter: settings.filter,
            mail,
            dry_run,
        })
    }
}
