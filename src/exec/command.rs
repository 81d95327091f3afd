// src/exec/command.rs

//! Run an external command as a single named operation.

use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use crate::telemetry::OperationLogger;

/// Why a wrapped command did not succeed.
///
/// The `Display` text is what ends up after `error:` in the ended line.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no command given")]
    Empty,

    #[error("failed to spawn command: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed waiting for command: {0}")]
    Wait(#[source] std::io::Error),

    #[error("command exited with status {0}")]
    Exited(i32),

    #[error("command terminated by signal")]
    Signalled,
}

impl CommandError {
    /// Process exit code to report for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Exited(code) => *code,
            _ => 1,
        }
    }
}

/// Build the process for `argv`.
///
/// - A single word is a shell line (`"make test && echo ok"`) and goes
///   through the platform shell.
/// - Several words are a program plus its arguments and are run directly,
///   so word boundaries survive exactly as given.
pub fn build_command(argv: &[String]) -> Result<Command, CommandError> {
    match argv {
        [] => Err(CommandError::Empty),
        [line] => {
            let mut c = if cfg!(windows) {
                let mut c = Command::new("cmd");
                c.arg("/C");
                c
            } else {
                let mut c = Command::new("sh");
                c.arg("-c");
                c
            };
            c.arg(line);
            Ok(c)
        }
        [program, args @ ..] => {
            let mut c = Command::new(program);
            c.args(args);
            Ok(c)
        }
    }
}

/// Run `argv` as the operation `name` (see [`build_command`]).
///
/// The child inherits stdin/stdout/stderr; only the lifecycle events are
/// added to the log.
pub async fn run_command(
    logger: &OperationLogger,
    name: &str,
    argv: &[String],
) -> Result<(), CommandError> {
    logger
        .execute_async(name, || async {
            debug!(operation = %name, argv = ?argv, "spawning command");

            let mut cmd = build_command(argv)?;

            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .kill_on_drop(true);

            let mut child = cmd.spawn().map_err(CommandError::Spawn)?;
            let status = child.wait().await.map_err(CommandError::Wait)?;

            debug!(operation = %name, status = ?status, "command exited");

            match status.code() {
                Some(0) => Ok(()),
                Some(code) => Err(CommandError::Exited(code)),
                None => Err(CommandError::Signalled),
            }
        })
        .await
}
