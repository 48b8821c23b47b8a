//! File logging setup.
//!
//! The dashboard owns the terminal, so log output goes to a file through a
//! non-blocking writer. `CLASSBOARD_LOG` overrides the configured level with
//! any `EnvFilter` directive string.

use std::fs;

use anyhow::{Context, Result};
use classboard_core::config::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "CLASSBOARD_LOG";

/// Installs the global subscriber. Keep the returned guard alive until exit
/// so buffered lines are flushed.
///
/// # Errors
/// Returns an error if the log file cannot be opened or the filter is invalid.
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    let path = config.file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log dir {}", parent.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = match std::env::var(LOG_ENV_VAR) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid {LOG_ENV_VAR} filter"))?,
        _ => EnvFilter::try_new(&config.level)
            .with_context(|| format!("Invalid log level '{}'", config.level))?,
    };

    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(guard)
}
