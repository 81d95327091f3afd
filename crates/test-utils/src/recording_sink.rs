use std::sync::{Arc, Mutex};

use oplogger::telemetry::{LogSink, Severity};

/// One line captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLine {
    pub severity: Severity,
    pub message: String,
}

/// A sink that:
/// - records every line it receives, in order
/// - also forwards it to `tracing` so failing tests show the stream.
///
/// Clones share the same buffer, so a test can hand one clone to the logger
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<RecordedLine>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<RecordedLine> {
        self.lines.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines().into_iter().map(|l| l.message).collect()
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }
}

impl LogSink for RecordingSink {
    fn log(&self, severity: Severity, message: &str) {
        tracing::debug!(%severity, "{}", message);
        self.lines.lock().unwrap().push(RecordedLine {
            severity,
            message: message.to_string(),
        });
    }
}
