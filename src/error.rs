// src/error.rs
//! Failure taxonomy shared by the fetcher, the notifier and the config loader.

use thiserror::Error;

/// Coarse failure class, used for logging and for callers that branch on outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    /// The origin rejected the request identity (HTTP 403). Retrying right away won't help.
    Blocked,
    HttpStatus,
    Malformed,
    Delivery,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Blocked => "blocked",
            FailureKind::HttpStatus => "http_status",
            FailureKind::Malformed => "malformed",
            FailureKind::Delivery => "delivery",
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("listing request blocked by origin (HTTP {status})")]
    Blocked { status: u16 },

    #[error("listing request failed with HTTP {status}")]
    Http { status: u16 },

    #[error("listing transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("malformed listing payload: {reason}")]
    Malformed { reason: String },
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Blocked { .. } => FailureKind::Blocked,
            FetchError::Http { .. } => FailureKind::HttpStatus,
            FetchError::Transport(_) => FailureKind::Transport,
            FetchError::Malformed { .. } => FailureKind::Malformed,
        }
    }

    /// Maps a non-200 status to the matching failure.
    pub fn from_status(status: u16) -> Self {
        if status == 403 {
            FetchError::Blocked { status }
        } else {
            FetchError::Http { status }
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Malformed {
            reason: e.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("building digest email: {0}")]
    Compose(#[from] lettre::error::Error),

    #[error("email delivery failed: {0:#}")]
    Delivery(#[source] anyhow::Error),
}

impl NotifyError {
    pub fn kind(&self) -> FailureKind {
        FailureKind::Delivery
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {name} is not set")]
    MissingVar { name: &'static str },

    #[error("environment variable {name} is invalid: {reason}")]
    InvalidVar { name: &'static str, reason: String },

    #[error("settings file {path}: {reason}")]
    Settings { path: String, reason: String },
}
