#![allow(dead_code)]

pub use oplogger_test_utils::{init_tracing, with_timeout, ManualClock, RecordedLine, RecordingSink};

use oplogger::telemetry::OperationLogger;

/// Logger wired to a fresh recording sink and manual clock.
pub fn recording_logger() -> (OperationLogger, RecordingSink, ManualClock) {
    init_tracing();
    let sink = RecordingSink::new();
    let clock = ManualClock::new();
    let logger = OperationLogger::builder()
        .sink(sink.clone())
        .clock(clock.clone())
        .build()
        .expect("sink is set");
    (logger, sink, clock)
}

/// Pieces of an `Operation ended: {name}, {elapsed}ms, {outcome}` line.
#[derive(Debug, Clone, PartialEq)]
pub struct EndedLine {
    pub elapsed: String,
    pub outcome: String,
}

impl EndedLine {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.parse().expect("elapsed is a number")
    }
}

/// Split the ended line of the operation `name`.
///
/// Names may contain anything (including `", "` or `"ms, "`), so the name is
/// matched as a known prefix rather than searched for. The elapsed part is
/// always digits and a dot, so the first `"ms, "` after it starts the outcome.
pub fn parse_ended(line: &str, name: &str) -> Option<EndedLine> {
    let rest = line
        .strip_prefix("Operation ended: ")?
        .strip_prefix(name)?
        .strip_prefix(", ")?;
    let (elapsed, outcome) = rest.split_once("ms, ")?;
    if !has_one_decimal(elapsed) {
        return None;
    }
    Some(EndedLine {
        elapsed: elapsed.to_string(),
        outcome: outcome.to_string(),
    })
}

/// True if `elapsed` has exactly one digit after the decimal point.
pub fn has_one_decimal(elapsed: &str) -> bool {
    match elapsed.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && frac.len() == 1
                && frac.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
