// src/telemetry/stopwatch.rs

//! Monotonic timing for a single invocation.

use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Source of monotonic time.
///
/// Production code uses [`MonotonicClock`]. Tests can supply a clock they
/// advance by hand so reported durations are deterministic.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> Instant;
}

/// Clock backed by `std::time::Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Start marker for one invocation, tied to the clock it was read from.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch<'a> {
    clock: &'a dyn Clock,
    started_at: Instant,
}

impl<'a> Stopwatch<'a> {
    pub fn start_new(clock: &'a dyn Clock) -> Self {
        Self {
            clock,
            started_at: clock.now(),
        }
    }

    /// Time since the stopwatch was started. Never negative.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started_at)
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}
