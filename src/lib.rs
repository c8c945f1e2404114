// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod config;
pub mod error;
pub mod ingest;
pub mod leads;
pub mod notify;
pub mod pipeline;

pub use crate::config::ScoutConfig;
pub use crate::error::{ConfigError, FailureKind, FetchError, NotifyError};
pub use crate::leads::{Lead, LeadFilter};
pub use crate::pipeline::{Delivery, RunReport, Scout};
