//! Lead scout — binary entrypoint.
//! One run per invocation: fetch, filter, notify, exit. Scheduling is external (cron etc.).

use lead_scout::{ScoutConfig, Scout};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact logs on stdout; `SCOUT_LOG_JSON=1` switches to JSON lines.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lead_scout=info,warn"));

    let json = std::env::var("SCOUT_LOG_JSON")
        .ok()
        .is_some_and(|v| v == "1");

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json().with_target(false)).init();
    } else {
        registry.with(fmt::layer().compact().with_target(false)).init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env locally; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    // Missing secrets are the only failure that stops the process (non-zero exit).
    let config = ScoutConfig::load()?;
    let scout = Scout::from_config(&config)?;

    // Fetch/send failures are logged by the pipeline; exit status stays 0 either way.
    match scout.run_once(chrono::Utc::now()).await {
        Ok(report) => tracing::debug!(
            fetched = report.fetched,
            leads = report.leads.len(),
            delivery = ?report.delivery,
            "run finished"
        ),
        Err(e) => tracing::error!(error = %e, kind = e.kind().as_str(), "run aborted before filtering"),
    }
    Ok(())
}
