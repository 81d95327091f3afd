// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::Parser;

use crate::telemetry::Severity;

/// Command-line arguments for `oplogger`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "oplogger",
    version,
    about = "Run a command as a named operation and log its start, end and duration.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `OpLogger.toml` in the current directory is used when it
    /// exists; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Operation name used in the lifecycle log lines.
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `OPLOGGER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<Severity>,

    /// Resolve config and print what would run, without running it.
    #[arg(long)]
    pub dry_run: bool,

    /// Command to run.
    ///
    /// A single word is handed to the platform shell as-is
    /// (`-- 'make && make test'`); several words are run directly as a
    /// program and its arguments.
    #[arg(last = true, required = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
