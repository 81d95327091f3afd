// src/lib.rs

//! Operation instrumentation: wrap sync or async work with
//! `Operation started` / `Operation ended` log lines, elapsed time and
//! transparent error propagation.
//!
//! ```no_run
//! use oplogger::telemetry::{OperationLogger, TracingSink};
//!
//! let logger = OperationLogger::new(TracingSink::new());
//! let answer: Result<i32, std::io::Error> = logger.execute("Load", || Ok(42));
//! assert_eq!(answer.unwrap(), 42);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod telemetry;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::exec::run_command;
use crate::telemetry::{OperationLogger, TracingSink};

pub use crate::telemetry::{LogSink, OperationOutcome, Severity};

/// High-level entry point used by `main.rs`.
///
/// Returns the process exit code: `0` on success, the child's exit code (or
/// `1`) when the wrapped command fails. Configuration and construction
/// problems are returned as errors.
pub async fn run(args: CliArgs) -> Result<i32> {
    let cfg = config::resolve(args.config.as_deref())?;

    if args.dry_run {
        print_dry_run(&cfg, &args);
        return Ok(0);
    }

    let logger = OperationLogger::builder()
        .sink(TracingSink::new())
        .with_config(&cfg.logger)
        .build()?;

    match run_command(&logger, &args.name, &args.command).await {
        Ok(()) => Ok(0),
        // Already reported by the ended line.
        Err(err) => Ok(err.exit_code()),
    }
}

/// Simple dry-run output: print resolved settings and the command.
fn print_dry_run(cfg: &ConfigFile, args: &CliArgs) {
    println!("oplogger dry-run");
    println!("  logger.event_level = {}", cfg.logger.event_level);
    println!("  logger.failure_level = {}", cfg.logger.failure_level);
    println!();
    println!("operation: {}", args.name);
    match args.command.as_slice() {
        [line] => println!("  shell: {line}"),
        argv => println!("  argv: {argv:?}"),
    }

    debug!("dry-run complete (no execution)");
}
