// tests/properties.rs

mod common;
use crate::common::{has_one_decimal, parse_ended, recording_logger};

use std::time::Duration;

use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct WorkError(String);

impl std::fmt::Display for WorkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Any single-line name, including "" and names containing ", " or "ms, ".
fn operation_name() -> impl Strategy<Value = String> {
    prop_oneof![
        ".*",
        Just(String::new()),
        "[a-z]{0,4}(, |ms, )[a-z ,]{0,8}",
    ]
}

proptest! {
    #[test]
    fn success_yields_started_then_success(name in operation_name(), value in any::<i64>()) {
        let (logger, sink, _clock) = recording_logger();

        let result: Result<i64, WorkError> = logger.execute(&name, || Ok(value));
        prop_assert_eq!(result, Ok(value));

        let messages = sink.messages();
        prop_assert_eq!(messages.len(), 2);
        prop_assert_eq!(&messages[0], &format!("Operation started: {name}"));

        prop_assert_eq!(&messages[1], &format!("Operation ended: {name}, 0.0ms, success"));

        let ended = parse_ended(&messages[1], &name).expect("ended line");
        prop_assert_eq!(ended.outcome.as_str(), "success");
        prop_assert!(has_one_decimal(&ended.elapsed));
    }

    #[test]
    fn failure_logs_verbatim_message(name in operation_name(), message in ".{0,40}") {
        let (logger, sink, _clock) = recording_logger();

        let result: Result<(), WorkError> =
            logger.execute(&name, || Err(WorkError(message.clone())));
        prop_assert_eq!(result, Err(WorkError(message.clone())));

        let messages = sink.messages();
        prop_assert_eq!(messages.len(), 2);
        prop_assert_eq!(
            &messages[1],
            &format!("Operation ended: {name}, 0.0ms, error: {message}")
        );

        let ended = parse_ended(&messages[1], &name).expect("ended line");
        prop_assert_eq!(ended.outcome, format!("error: {message}"));
    }

    #[test]
    fn elapsed_is_non_negative_and_tracks_delay(delays in proptest::collection::vec(0u64..5_000_000, 1..8)) {
        let (logger, sink, clock) = recording_logger();

        let mut sorted = delays.clone();
        sorted.sort_unstable();

        for delay in &sorted {
            let work_clock = clock.clone();
            let _: Result<(), WorkError> = logger.execute("Delay", || {
                work_clock.advance(Duration::from_micros(*delay));
                Ok(())
            });
        }

        let elapsed: Vec<f64> = sink
            .messages()
            .iter()
            .filter_map(|m| parse_ended(m, "Delay"))
            .map(|e| e.elapsed_ms())
            .collect();

        prop_assert_eq!(elapsed.len(), sorted.len());
        prop_assert!(elapsed.iter().all(|ms| *ms >= 0.0));
        prop_assert!(elapsed.windows(2).all(|w| w[0] <= w[1]));
    }
}
