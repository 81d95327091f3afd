// src/telemetry/context.rs

//! Per-invocation context extension point.
//!
//! A fuller implementation would hang correlation identifiers (trace/span
//! ids, request ids) off this. Nothing populates it today and
//! [`OperationLogger::context`](super::OperationLogger::context) always
//! returns `None`; callers must tolerate that.

/// Contextual state attached to the operation currently being executed.
pub trait OperationContext: Send + Sync {
    /// Look up a named property (e.g. a correlation id).
    fn property(&self, key: &str) -> Option<&str>;
}
