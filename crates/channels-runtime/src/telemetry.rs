//! # Tracing Setup
//!
//! Installs a `fmt` subscriber filtered by `RUST_LOG`, falling back to a
//! caller-supplied default. Safe to call more than once.

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the caller names one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Tracing setup failures.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The default filter directive did not parse.
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// The rejected directive
        filter: String,
        /// Parser message
        reason: String,
    },
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` when another subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> Result<bool, TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| TelemetryError::InvalidFilter {
            filter: default_filter.to_string(),
            reason: e.to_string(),
        })?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(default_filter, "tracing initialized");
    }
    Ok(installed)
}
