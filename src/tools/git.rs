//! Git repository initialization.
use std::path::Path;

use crate::error::ExternalToolError;
use crate::exec::Executor;

/// Run `git init` inside `dir`.
///
/// # Errors
///
/// Returns an error if git cannot be started or exits non-zero.
pub fn init(executor: &dyn Executor, dir: &Path) -> Result<(), ExternalToolError> {
    executor.run_in(dir, "git", &["init"])?;
    Ok(())
}

/// Stage `files` (relative to `dir`) with `git add`.
///
/// # Errors
///
/// Returns an error if git cannot be started or exits non-zero.
pub fn add(executor: &dyn Executor, dir: &Path, files: &[&str]) -> Result<(), ExternalToolError> {
    let mut args = vec!["add", "--"];
    args.extend_from_slice(files);
    executor.run_in(dir, "git", &args)?;
    Ok(())
}
