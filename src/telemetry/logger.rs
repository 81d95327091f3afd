// src/telemetry/logger.rs

//! The operation logger: wraps a unit of work with started/ended events.
//!
//! Both entry points share one algorithm:
//!
//! 1. capture a monotonic start marker,
//! 2. emit `Operation started: {name}`,
//! 3. run the work (or create its future and await it),
//! 4. emit `Operation ended: {name}, {elapsed}ms, success` or
//!    `... error: {message}`,
//! 5. hand the work's own `Ok`/`Err` back to the caller unchanged.
//!
//! Work that returns nothing uses `T = ()`, so the two methods cover the
//! sync/async × result/no-result shapes.
//!
//! The ended event is emitted from an `OperationScope` guard. If the work
//! panics, or an `execute_async` future is dropped before it completes, the
//! guard still emits exactly one ended line (with `operation panicked` or
//! `operation cancelled` as the error message) and the panic or drop carries
//! on as it would without instrumentation.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::config::LoggerConfig;
use crate::errors::{OperationLoggerError, Result};

use super::context::OperationContext;
use super::outcome::{
    CANCELLED_MESSAGE, OperationOutcome, PANICKED_MESSAGE, ended_line, started_line,
};
use super::sink::{LogSink, Severity};
use super::stopwatch::{Clock, MonotonicClock, Stopwatch};

/// Wraps units of work with lifecycle events and timing.
///
/// Stateless between invocations: the same logger can be shared (e.g. behind
/// an `Arc`) and used from any number of threads or tasks at once.
#[derive(Clone)]
pub struct OperationLogger {
    sink: Arc<dyn LogSink>,
    clock: Arc<dyn Clock>,
    event_level: Severity,
    failure_level: Severity,
}

impl OperationLogger {
    /// Create a logger writing to `sink` with default settings.
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
            clock: Arc::new(MonotonicClock),
            event_level: Severity::Info,
            failure_level: Severity::Info,
        }
    }

    pub fn builder() -> OperationLoggerBuilder {
        OperationLoggerBuilder::new()
    }

    /// Context of the operation currently being executed.
    ///
    /// No correlation mechanism is wired in yet, so this is always `None`.
    pub fn context(&self) -> Option<&dyn OperationContext> {
        None
    }

    pub fn event_level(&self) -> Severity {
        self.event_level
    }

    pub fn failure_level(&self) -> Severity {
        self.failure_level
    }

    /// Run synchronous work under `name`.
    ///
    /// Returns exactly what `work` returned. An `Err` is logged by its
    /// `Display` message before being handed back.
    pub fn execute<T, E, F>(&self, name: &str, work: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        let scope = self.begin(name);
        let result = work();
        scope.finish(&result);
        result
    }

    /// Run asynchronous work under `name`.
    ///
    /// The only suspension point is the await of the future `work` returns.
    /// Dropping the returned future before it resolves logs the invocation
    /// as cancelled.
    pub async fn execute_async<T, E, F, Fut>(
        &self,
        name: &str,
        work: F,
    ) -> std::result::Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
        E: fmt::Display,
    {
        let scope = self.begin(name);
        let result = work().await;
        scope.finish(&result);
        result
    }

    fn begin<'a>(&'a self, name: &'a str) -> OperationScope<'a> {
        let stopwatch = Stopwatch::start_new(self.clock.as_ref());
        self.sink.log(self.event_level, &started_line(name));
        OperationScope {
            logger: self,
            name,
            stopwatch,
            ended: false,
        }
    }
}

impl fmt::Debug for OperationLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationLogger")
            .field("clock", &self.clock)
            .field("event_level", &self.event_level)
            .field("failure_level", &self.failure_level)
            .finish_non_exhaustive()
    }
}

/// One in-flight invocation. Emits the ended event exactly once.
struct OperationScope<'a> {
    logger: &'a OperationLogger,
    name: &'a str,
    stopwatch: Stopwatch<'a>,
    ended: bool,
}

impl OperationScope<'_> {
    fn finish<T, E: fmt::Display>(mut self, result: &std::result::Result<T, E>) {
        let outcome = match result {
            Ok(_) => OperationOutcome::Success,
            Err(err) => OperationOutcome::failure(err),
        };
        self.end(outcome);
    }

    fn end(&mut self, outcome: OperationOutcome) {
        self.ended = true;
        let elapsed_ms = self.stopwatch.elapsed_ms();
        let level = if outcome.is_success() {
            self.logger.event_level
        } else {
            self.logger.failure_level
        };
        self.logger
            .sink
            .log(level, &ended_line(self.name, elapsed_ms, &outcome));
    }
}

impl Drop for OperationScope<'_> {
    fn drop(&mut self) {
        if self.ended {
            return;
        }
        let message = if std::thread::panicking() {
            PANICKED_MESSAGE
        } else {
            CANCELLED_MESSAGE
        };
        self.end(OperationOutcome::Failure(message.to_string()));
    }
}

/// Builder for [`OperationLogger`].
///
/// A sink is mandatory; [`build`](Self::build) fails with
/// [`OperationLoggerError::InvalidArgument`] without one.
#[derive(Default)]
pub struct OperationLoggerBuilder {
    sink: Option<Arc<dyn LogSink>>,
    clock: Option<Arc<dyn Clock>>,
    event_level: Severity,
    failure_level: Severity,
}

impl OperationLoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Set or clear the sink from an optional, already shared handle.
    pub fn shared_sink(mut self, sink: Option<Arc<dyn LogSink>>) -> Self {
        self.sink = sink;
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Severity of started events and successful ended events.
    pub fn event_level(mut self, level: Severity) -> Self {
        self.event_level = level;
        self
    }

    /// Severity of ended events for failed, panicked or cancelled work.
    pub fn failure_level(mut self, level: Severity) -> Self {
        self.failure_level = level;
        self
    }

    /// Apply the `[logger]` section of a config file.
    pub fn with_config(self, config: &LoggerConfig) -> Self {
        self.event_level(config.event_level)
            .failure_level(config.failure_level)
    }

    pub fn build(self) -> Result<OperationLogger> {
        let sink = self
            .sink
            .ok_or(OperationLoggerError::InvalidArgument("sink"))?;

        Ok(OperationLogger {
            sink,
            clock: self.clock.unwrap_or_else(|| Arc::new(MonotonicClock)),
            event_level: self.event_level,
            failure_level: self.failure_level,
        })
    }
}
