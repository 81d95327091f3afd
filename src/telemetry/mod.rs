// src/telemetry/mod.rs

//! Operation instrumentation.
//!
//! This module ties together:
//! - the [`sink`] abstraction the lifecycle events are written to
//! - the monotonic [`stopwatch`] used to time each invocation
//! - the [`outcome`] of an invocation and the exact line formats
//! - the [`context`] extension point
//! - the [`logger`] itself, which wraps sync and async work
//!
//! Every invocation of [`OperationLogger::execute`] or
//! [`OperationLogger::execute_async`] produces exactly two lines:
//!
//! ```text
//! Operation started: Load
//! Operation ended: Load, 12.3ms, success
//! ```

pub mod context;
pub mod logger;
pub mod outcome;
pub mod sink;
pub mod stopwatch;

pub use context::OperationContext;
pub use logger::{OperationLogger, OperationLoggerBuilder};
pub use outcome::OperationOutcome;
pub use sink::{LogSink, Severity, TracingSink};
pub use stopwatch::{Clock, MonotonicClock, Stopwatch};
