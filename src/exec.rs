//! Process execution behind the [`Executor`] seam.
use std::path::Path;
use std::process::{Command, Output};

use crate::error::ExternalToolError;

/// Result of a command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, if the process was not terminated by a signal.
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Abstraction over process execution so callers can be tested without
/// spawning real binaries.  Production code uses [`SystemExecutor`].
pub trait Executor: Send + Sync + std::fmt::Debug {
    /// Run a command and return its output. Fails if the command exits non-zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be started or exits non-zero.
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult, ExternalToolError>;

    /// Run a command in a specific directory. Fails if the command exits non-zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be started or exits non-zero.
    fn run_in(
        &self,
        dir: &Path,
        program: &str,
        args: &[&str],
    ) -> Result<ExecResult, ExternalToolError>;

    /// Check if a program is available on `PATH`.
    fn which(&self, program: &str) -> bool;
}

/// [`Executor`] that spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

/// Human-readable label for a command line, used in error messages.
fn label(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}

/// Execute a command and return the result, failing on non-zero exit.
fn execute_checked(mut cmd: Command, label: String) -> Result<ExecResult, ExternalToolError> {
    let output = cmd.output().map_err(|source| ExternalToolError::Spawn {
        command: label.clone(),
        source,
    })?;
    let result = ExecResult::from(output);
    if !result.success {
        return Err(ExternalToolError::NonZeroExit {
            command: label,
            code: result.code.unwrap_or(-1),
            stderr: result.stderr.trim().to_string(),
        });
    }
    Ok(result)
}

impl Executor for SystemExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult, ExternalToolError> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        execute_checked(cmd, label(program, args))
    }

    fn run_in(
        &self,
        dir: &Path,
        program: &str,
        args: &[&str],
    ) -> Result<ExecResult, ExternalToolError> {
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(dir);
        execute_checked(
            cmd,
            format!("{} in {}", label(program, args), dir.display()),
        )
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
