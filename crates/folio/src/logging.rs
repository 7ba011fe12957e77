// File: src/logging.rs
// Purpose: tracing subscriber setup for the folio binary

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Builds the filter from FOLIO_LOG, falling back to `default_level`
pub fn filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level)
            .with_context(|| format!("Invalid log filter: {:?}", default_level)),
    }
}

/// Installs the global fmt subscriber, writing to stderr
///
/// Stdout is left to command output so `--json` stays machine-readable.
pub fn init(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_level)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
