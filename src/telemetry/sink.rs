// src/telemetry/sink.rs

//! Where lifecycle events go.
//!
//! The operation logger only needs "emit this message at this severity".
//! Production code uses [`TracingSink`]; tests can provide a sink that
//! records the lines it receives.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use clap::ValueEnum;

/// Severity of a single log line.
///
/// Also the value type of the `--log-level` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, ValueEnum)]
pub enum Severity {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Trace => "trace",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warn),
            "info" | "information" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "trace" => Ok(Severity::Trace),
            other => Err(format!("unknown severity '{other}'")),
        }
    }
}

impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => tracing::Level::ERROR,
            Severity::Warn => tracing::Level::WARN,
            Severity::Info => tracing::Level::INFO,
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Trace => tracing::Level::TRACE,
        }
    }
}

/// Anything that can record a pre-formatted message at a severity.
///
/// Implementations are shared between concurrent invocations and are called
/// without any locking on the logger's side, so they must be `Send + Sync`.
/// A sink must not panic on well-formed input.
pub trait LogSink: Send + Sync {
    fn log(&self, severity: Severity, message: &str);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn log(&self, severity: Severity, message: &str) {
        (**self).log(severity, message)
    }
}

/// Default sink: forwards every line to `tracing` under the
/// `oplogger::operation` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn log(&self, severity: Severity, message: &str) {
        // `tracing` needs the level at compile time.
        match severity {
            Severity::Error => tracing::error!(target: "oplogger::operation", "{}", message),
            Severity::Warn => tracing::warn!(target: "oplogger::operation", "{}", message),
            Severity::Info => tracing::info!(target: "oplogger::operation", "{}", message),
            Severity::Debug => tracing::debug!(target: "oplogger::operation", "{}", message),
            Severity::Trace => tracing::trace!(target: "oplogger::operation", "{}", message),
        }
    }
}
