// src/config/validate.rs

use crate::config::model::{ConfigFile, LoggerConfig, RawConfigFile, RawLoggerSection};
use crate::errors::{OperationLoggerError, Result};
use crate::telemetry::Severity;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = OperationLoggerError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        Ok(ConfigFile {
            logger: validate_logger_section(&raw.logger)?,
        })
    }
}

fn validate_logger_section(section: &RawLoggerSection) -> Result<LoggerConfig> {
    Ok(LoggerConfig {
        event_level: parse_severity("event_level", &section.event_level)?,
        failure_level: parse_severity("failure_level", &section.failure_level)?,
    })
}

fn parse_severity(key: &str, value: &str) -> Result<Severity> {
    value
        .parse::<Severity>()
        .map_err(|msg| OperationLoggerError::ConfigError(format!("[logger].{key}: {msg}")))
}
