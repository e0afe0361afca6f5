//! Package-manager subprocess invocation.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Trait for running external programs such as `poetry` or `uv`.
pub trait ProcessRunner {
    /// Runs `program` with `args` in `cwd` and waits for it to exit.
    ///
    /// # Errors
    /// * `Error::ProcessError` if the program cannot be started or exits
    ///   with a failure status
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

/// Runs programs as child processes with inherited stdout and stderr.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

/// Renders a program and its arguments as a single command line for messages.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ")
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let command = command_line(program, args);
        debug!("Running '{}' in '{}'.", command, cwd.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::ProcessError { command: command.clone(), reason: e.to_string() })?;

        if !status.success() {
            return Err(Error::ProcessError {
                command,
                reason: format!("exited with status: {status}"),
            });
        }

        Ok(())
    }
}
