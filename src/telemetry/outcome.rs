// src/telemetry/outcome.rs

//! Outcome of one invocation and the lifecycle line formats.
//!
//! Downstream log parsers depend on these exact shapes:
//!
//! ```text
//! Operation started: {name}
//! Operation ended: {name}, {elapsed:.1}ms, success
//! Operation ended: {name}, {elapsed:.1}ms, error: {message}
//! ```

use std::fmt;

/// Message recorded when the work panics.
pub const PANICKED_MESSAGE: &str = "operation panicked";

/// Message recorded when an async invocation is dropped before completing.
pub const CANCELLED_MESSAGE: &str = "operation cancelled";

/// How an invocation finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    Success,
    /// Carries the display message of the error the work produced.
    Failure(String),
}

impl OperationOutcome {
    /// Build a failure outcome from any displayable error.
    pub fn failure(err: &impl fmt::Display) -> Self {
        OperationOutcome::Failure(err.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationOutcome::Success)
    }
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationOutcome::Success => f.write_str("success"),
            OperationOutcome::Failure(message) => write!(f, "error: {message}"),
        }
    }
}

pub fn started_line(name: &str) -> String {
    format!("Operation started: {name}")
}

pub fn ended_line(name: &str, elapsed_ms: f64, outcome: &OperationOutcome) -> String {
    format!("Operation ended: {name}, {elapsed_ms:.1}ms, {outcome}")
}
