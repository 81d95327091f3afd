// src/exec/mod.rs

//! Process execution for the `oplogger` binary.
//!
//! [`command`] runs an external command inside
//! [`OperationLogger::execute_async`](crate::telemetry::OperationLogger::execute_async),
//! so a command gets the same started/ended lines as any in-process work.

pub mod command;

pub use command::{CommandError, build_command, run_command};
