// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Errors produced by *wrapped work* never pass through this type: the
//! operation logger hands the caller's own error back untouched.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OperationLoggerError {
    /// A required dependency was missing at construction time.
    #[error("Invalid argument: {0} must be provided")]
    InvalidArgument(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, OperationLoggerError>;
