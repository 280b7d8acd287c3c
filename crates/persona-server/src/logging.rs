//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after `.env` has been loaded so that
//! `RUST_LOG` from the file is honoured.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; [`DEFAULT_FILTER`] is used when it is unset
/// or invalid. Returns an error if a subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set subscriber: {e}"))?;

    Ok(())
}
