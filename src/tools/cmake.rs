//! CMake version probing.
use regex::Regex;

use crate::error::EnvironmentError;
use crate::exec::Executor;

/// Name of the build tool binary.
pub const PROGRAM: &str = "cmake";

/// Extract the `<major>.<minor>.<patch>` version from `cmake --version` output.
///
/// Accepts distro-renamed binaries such as `cmake3 version 3.20.2`.
#[must_use]
pub fn parse_version(output: &str) -> Option<String> {
    let re = Regex::new(r"cmake\S* version (\d+\.\d+\.\d+)").ok()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Run `cmake --version` and parse the installed version.
///
/// # Errors
///
/// Returns an error if `cmake` is not on `PATH`, exits non-zero, or prints
/// no recognisable version.
pub fn probe_version(executor: &dyn Executor) -> Result<String, EnvironmentError> {
    if !executor.which(PROGRAM) {
        return Err(EnvironmentError::ToolNotFound(PROGRAM.to_string()));
    }

    let result = executor.run(PROGRAM, &["--version"]).map_err(|e| {
        EnvironmentError::VersionDetectionFailed {
            tool: PROGRAM.to_string(),
            reason: e.to_string(),
        }
    })?;

    parse_version(&result.stdout).ok_or_else(|| EnvironmentError::VersionDetectionFailed {
        tool: PROGRAM.to_string(),
        reason: "unable to parse CMake version".to_string(),
    })
}
