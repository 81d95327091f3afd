// src/logging.rs

//! Logging setup for `oplogger` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `OPLOGGER_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`
//!
//! Logs are sent to STDERR so the wrapped command keeps stdout to itself.

use anyhow::Result;
use tracing_subscriber::fmt;

use crate::telemetry::Severity;

/// Environment variable consulted when no `--log-level` is given.
pub const LOG_ENV_VAR: &str = "OPLOGGER_LOG";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<Severity>) -> Result<()> {
    let level = match cli_level {
        Some(severity) => tracing::Level::from(severity),
        None => std::env::var(LOG_ENV_VAR)
            .ok()
            .and_then(|s| parse_level_str(&s))
            .unwrap_or(tracing::Level::INFO),
    };

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

/// Parse a level name the same way config severities are parsed.
fn parse_level_str(s: &str) -> Option<tracing::Level> {
    s.parse::<Severity>().ok().map(tracing::Level::from)
}
