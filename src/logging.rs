//! Tracing subscriber setup
//!
//! Logs go to stderr for the line-based commands. The TUI owns the terminal,
//! so in that mode logs are written only when a log file is configured.

use crate::config::LogConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn env_filter(config: &LogConfig) -> EnvFilter {
    match config.filter_directive() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

/// Install the global subscriber
///
/// With `terminal = false` and no log file, nothing is installed and all
/// events are dropped.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already set.
pub fn init(config: &LogConfig, terminal: bool) -> Result<()> {
    if let Some(path) = &config.file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        let file_layer = fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file));

        tracing_subscriber::registry()
            .with(file_layer.with_filter(env_filter(config)))
            .try_init()
            .context("Failed to install log subscriber")?;
    } else if terminal {
        let terminal_layer = fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(terminal_layer.with_filter(env_filter(config)))
            .try_init()
            .context("Failed to install log subscriber")?;
    }

    Ok(())
}
