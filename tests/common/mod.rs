// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed workspace and a recording fake
// toolchain so each integration test can run a full generation pass without
// invoking cmake, git or vcpkg.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code, clippy::expect_used, clippy::panic)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use cppgen::commands::generate::{RunSettings, Services};
use cppgen::config::{PackageManager, ProjectOptions};
use cppgen::error::{EnvironmentError, ExternalToolError};
use cppgen::logging::Logger;
use cppgen::operations::SystemFileSystemOps;
use cppgen::platform::{Os, Platform};
use cppgen::prompt::FixedPrompt;
use cppgen::tools::Toolchain;

/// Toolchain double that records calls and touches nothing.
#[derive(Debug)]
pub struct RecordingToolchain {
    /// Version reported by the probe; `None` simulates a missing cmake.
    pub version: Option<String>,
    /// When `true`, `git add` fails.
    pub fail_add: bool,
    pub calls: Mutex<Vec<String>>,
}

impl Default for RecordingToolchain {
    fn default() -> Self {
        Self {
            version: Some("3.28.1".to_string()),
            fail_add: false,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl RecordingToolchain {
    /// Recorded calls in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().expect("calls lock").push(call.into());
    }
}

impl Toolchain for RecordingToolchain {
    fn build_tool_version(&self) -> Result<String, EnvironmentError> {
        self.record("cmake --version");
        self.version
            .clone()
            .ok_or_else(|| EnvironmentError::ToolNotFound("cmake".to_string()))
    }

    fn init_repository(&self, _project_dir: &Path) -> Result<(), ExternalToolError> {
        self.record("git init");
        Ok(())
    }

    fn add_files(&self, _project_dir: &Path, files: &[&str]) -> Result<(), ExternalToolError> {
        self.record(format!("git add {}", files.join(" ")));
        if self.fail_add {
            return Err(ExternalToolError::NonZeroExit {
                command: "git add".to_string(),
                code: 128,
                stderr: "not a git repository".to_string(),
            });
        }
        Ok(())
    }

    fn bootstrap_package_manager(
        &self,
        _project_dir: &Path,
        manager: PackageManager,
    ) -> Result<(), ExternalToolError> {
        self.record(format!("bootstrap {manager}"));
        Ok(())
    }
}

/// An isolated workspace backed by a [`tempfile::TempDir`].
pub struct Workspace {
    /// Parent directory projects are generated into.
    pub root: tempfile::TempDir,
    /// Toolchain shared with every pass run from this workspace.
    pub tools: Arc<RecordingToolchain>,
}

impl Workspace {
    /// Create an empty workspace with a default toolchain.
    pub fn new() -> Self {
        Self::with_tools(RecordingToolchain::default())
    }

    /// Create an empty workspace around `tools`.
    pub fn with_tools(tools: RecordingToolchain) -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
            tools: Arc::new(tools),
        }
    }

    /// Settings that generate into this workspace.
    pub fn settings(&self, dry_run: bool) -> RunSettings {
        RunSettings {
            parent_dir: self.root.path().to_path_buf(),
            dry_run,
            platform: Platform::new(Os::Linux),
        }
    }

    /// Services that answer the git prompt with `answer`.
    pub fn services(&self, answer: bool) -> Services {
        Services {
            tools: self.tools.clone(),
            fs_ops: Arc::new(SystemFileSystemOps),
            prompt: Arc::new(FixedPrompt(answer)),
            log: Arc::new(Logger::new()),
        }
    }

    /// Path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Contents of a generated file.
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("reading {relative}: {e}"))
    }

    /// Returns `true` if the workspace is still empty.
    pub fn is_empty(&self) -> bool {
        std::fs::read_dir(self.root.path())
            .expect("read workspace")
            .next()
            .is_none()
    }
}

/// Options for a C++ executable named `name` with everything else at its default.
pub fn cpp_options(name: &str) -> ProjectOptions {
    ProjectOptions {
        name: name.to_string(),
        artifact: "executable".to_string(),
        language: "cpp".to_string(),
        standard: "11".to_string(),
        package_manager: None,
        generator: "Ninja".to_string(),
    }
}
