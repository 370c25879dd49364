//! Capability interface over the external tools a generation pass relies on.
//!
//! Tasks never spawn processes directly: they go through [`Toolchain`] so
//! tests can substitute a fake instead of invoking real binaries.
pub mod cmake;
pub mod git;
pub mod vcpkg;

use std::path::Path;
use std::sync::Arc;

use crate::config::PackageManager;
use crate::error::{EnvironmentError, ExternalToolError};
use crate::exec::Executor;
use crate::platform::Platform;

/// Build tool, version control and package-manager capabilities.
pub trait Toolchain: Send + Sync + std::fmt::Debug {
    /// Probe the installed build tool and return its `<major>.<minor>.<patch>` version.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool is missing or its output is unparseable.
    fn build_tool_version(&self) -> Result<String, EnvironmentError>;

    /// Initialize a repository in `project_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the version-control tool fails.
    fn init_repository(&self, project_dir: &Path) -> Result<(), ExternalToolError>;

    /// Add `files` (relative to `project_dir`) to version control.
    ///
    /// # Errors
    ///
    /// Returns an error if the version-control tool fails.
    fn add_files(&self, project_dir: &Path, files: &[&str]) -> Result<(), ExternalToolError>;

    /// Fetch and bootstrap the local tooling for `manager` inside `project_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if any bootstrap step fails.
    fn bootstrap_package_manager(
        &self,
        project_dir: &Path,
        manager: PackageManager,
    ) -> Result<(), ExternalToolError>;
}

/// [`Toolchain`] backed by real `cmake`, `git` and `vcpkg` invocations.
#[derive(Debug, Clone)]
pub struct SystemToolchain {
    executor: Arc<dyn Executor>,
    platform: Platform,
}

impl SystemToolchain {
    /// Create a toolchain that runs commands through `executor`.
    #[must_use]
    pub fn new(executor: Arc<dyn Executor>, platform: Platform) -> Self {
        Self { executor, platform }
    }
}

impl Toolchain for SystemToolchain {
    fn build_tool_version(&self) -> Result<String, EnvironmentError> {
        cmake::probe_version(self.executor.as_ref())
    }

    fn init_repository(&self, project_dir: &Path) -> Result<(), ExternalToolError> {
        git::init(self.executor.as_ref(), project_dir)
    }

    fn add_files(&self, project_dir: &Path, files: &[&str]) -> Result<(), ExternalToolError> {
        git::add(self.executor.as_ref(), project_dir, files)
    }

    fn bootstrap_package_manager(
        &self,
        project_dir: &Path,
        manager: PackageManager,
    ) -> Result<(), ExternalToolError> {
        match manager {
            PackageManager::Vcpkg => {
                vcpkg::bootstrap(self.executor.as_ref(), &self.platform, project_dir)
            }
        }
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::exec::test_helpers::MockExecutor;
    use crate::platform::Os;

    #[test]
    fn system_toolchain_probes_cmake() {
        let executor = Arc::new(MockExecutor::ok("cmake version 3.29.3\n"));
        let tools = SystemToolchain::new(executor.clone(), Platform::new(Os::Linux));
        assert_eq!(tools.build_tool_version().unwrap(), "3.29.3");
        assert_eq!(executor.calls(), vec!["cmake --version"]);
    }

    #[test]
    fn system_toolchain_routes_git_calls() {
        let executor = Arc::new(MockExecutor::with_responses(vec![
            (true, String::new()),
            (true, String::new()),
        ]));
        let tools = SystemToolchain::new(executor.clone(), Platform::new(Os::Linux));
        let dir = Path::new("demo");
        tools.init_repository(dir).unwrap();
        tools.add_files(dir, &[".gitignore"]).unwrap();
        assert_eq!(
            executor.calls(),
            vec!["[demo] git init", "[demo] git add -- .gitignore"]
        );
    }

    #[test]
    fn system_toolchain_bootstraps_vcpkg() {
        let executor = Arc::new(MockExecutor::with_responses(vec![
            (true, String::new()),
            (true, String::new()),
            (true, String::new()),
        ]));
        let tools = SystemToolchain::new(executor.clone(), Platform::new(Os::Linux));
        tools
            .bootstrap_package_manager(Path::new("demo"), PackageManager::Vcpkg)
            .unwrap();
        assert_eq!(executor.call_count(), 3);
    }
}
