//! Logging setup
//!
//! `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{DebugConfig, LogLevel};
use crate::error::{FrontendError, Result};

/// Filter from `RUST_LOG`, falling back to `level`
pub fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()))
}

/// Install the global `tracing` subscriber.
///
/// Fails if a subscriber is already installed or the log file can't be opened.
pub fn init(debug: &DebugConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(build_filter(debug.log_level));

    let result = if debug.log_to_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&debug.log_path)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| FrontendError::Logging(e.to_string()))
}
