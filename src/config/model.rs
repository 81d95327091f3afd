// src/config/model.rs

use serde::Deserialize;

use crate::telemetry::Severity;

/// Configuration file as read from TOML, before validation.
///
/// ```toml
/// [logger]
/// event_level = "info"
/// failure_level = "warn"
/// ```
///
/// All sections and keys are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub logger: RawLoggerSection,
}

/// `[logger]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLoggerSection {
    /// Severity of started events and successful ended events.
    #[serde(default = "default_level")]
    pub event_level: String,

    /// Severity of ended events for failed work.
    #[serde(default = "default_level")]
    pub failure_level: String,
}

fn default_level() -> String {
    Severity::default().to_string()
}

impl Default for RawLoggerSection {
    fn default() -> Self {
        Self {
            event_level: default_level(),
            failure_level: default_level(),
        }
    }
}

/// Validated configuration.
///
/// Obtained via `ConfigFile::try_from(raw)` or
/// [`load_and_validate`](crate::config::load_and_validate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub logger: LoggerConfig,
}

/// Settings applied to an [`OperationLogger`](crate::telemetry::OperationLogger).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    pub event_level: Severity,
    pub failure_level: Severity,
}
