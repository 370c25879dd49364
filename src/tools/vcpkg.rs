//! vcpkg checkout, bootstrap and manifest initialization.
use std::path::Path;

use crate::error::ExternalToolError;
use crate::exec::Executor;
use crate::platform::Platform;

/// Upstream vcpkg repository.
pub const REPOSITORY_URL: &str = "https://github.com/microsoft/vcpkg.git";

/// Directory (relative to the project root) the vcpkg checkout lives in.
pub const CHECKOUT_DIR: &str = "vcpkg";

/// Clone vcpkg into `<project_dir>/vcpkg`, build its executable, and create
/// an application manifest in the project root.
///
/// Each step blocks until the previous one finishes; the first failure stops
/// the sequence.  `project_dir` should be absolute: the vcpkg executable is
/// spawned by path with the project root as its working directory.
///
/// # Errors
///
/// Returns an error if any of the clone, bootstrap, or `vcpkg new` steps
/// cannot be started or exits non-zero.
pub fn bootstrap(
    executor: &dyn Executor,
    platform: &Platform,
    project_dir: &Path,
) -> Result<(), ExternalToolError> {
    executor.run_in(
        project_dir,
        "git",
        &["clone", REPOSITORY_URL, CHECKOUT_DIR],
    )?;

    let checkout = project_dir.join(CHECKOUT_DIR);
    let script = checkout.join(platform.vcpkg_bootstrap_script());
    executor.run(&script.to_string_lossy(), &["-disableMetrics"])?;

    let vcpkg = checkout.join(platform.vcpkg_executable());
    executor.run_in(project_dir, &vcpkg.to_string_lossy(), &["new", "--application"])?;
    Ok(())
}
