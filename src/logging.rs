//! Log sink setup: console plus an append-only log file.
//!
//! Services emit plain `tracing` events; this module is the only place that
//! knows where they end up.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.log_filter` when set.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened for appending.
pub fn init(config: &AppConfig) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let console_layer = fmt::layer().with_target(true);
    let file_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(Arc::new(file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
