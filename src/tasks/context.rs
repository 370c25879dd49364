use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ProjectDescriptor;
use crate::logging::Log;
use crate::operations::FileSystemOps;
use crate::platform::Platform;
use crate::prompt::Prompt;
use crate::tools::Toolchain;

/// Shared context for task execution.
pub struct Context {
    /// Validated project descriptor.
    pub descriptor: ProjectDescriptor,
    /// Root of the generated project (`<parent>/<name>`).
    pub project_dir: PathBuf,
    /// Detected platform information.
    pub platform: Platform,
    /// Logger for output and task recording.
    pub log: Arc<dyn Log>,
    /// Whether to report changes without applying them.
    pub dry_run: bool,
    /// External tool capabilities.
    pub tools: Arc<dyn Toolchain>,
    /// Filesystem operation abstraction.
    pub fs_ops: Arc<dyn FileSystemOps>,
    /// Source of yes/no answers.
    pub prompt: Arc<dyn Prompt>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("descriptor", &self.descriptor)
            .field("project_dir", &self.project_dir)
            .field("platform", &self.platform)
            .field("dry_run", &self.dry_run)
            .field("log", &"<dyn Log>")
            .field("tools", &"<dyn Toolchain>")
            .field("fs_ops", &"<dyn FileSystemOps>")
            .field("prompt", &"<dyn Prompt>")
            .finish()
    }
}

impl Context {
    /// Absolute path of a project-relative `/`-separated path.
    #[must_use]
    pub fn project_path(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.project_dir.clone(), |acc, part| acc.join(part))
    }

    /// Root of the generated project.
    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }
}
