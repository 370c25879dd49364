use anyhow::Result;

use super::{Context, Task, TaskResult, process_resources};
use crate::resources::DirectoryResource;

/// Directories created under the project root.
pub const DIRECTORIES: [&str; 3] = ["src", "include", "build"];

/// Create the project root and its standard directories.
#[derive(Debug)]
pub struct CreateProjectLayout;

impl Task for CreateProjectLayout {
    fn name(&self) -> &str {
        "create project layout"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let fs = ctx.fs_ops.as_ref();
        let root = DirectoryResource::new(ctx.project_dir.clone(), fs);
        let children = DIRECTORIES
            .iter()
            .map(|dir| DirectoryResource::new(ctx.project_path(dir), fs));
        let stats = process_resources(ctx, std::iter::once(root).chain(children), "create")?;
        Ok(stats.finish(ctx))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{FsError, GenerateError};
    use crate::operations::MockFileSystemOps;
    use crate::tasks::test_helpers::make_context;
    use std::path::Path;
    use std::sync::Arc;

    #[test]
    fn creates_all_directories() {
        let fs = Arc::new(MockFileSystemOps::new());
        let ctx = make_context(fs.clone(), false);
        assert_eq!(CreateProjectLayout.run(&ctx).unwrap(), TaskResult::Ok);
        for dir in ["/w/demo", "/w/demo/src", "/w/demo/include", "/w/demo/build"] {
            assert!(fs.has_dir(Path::new(dir)), "{dir} should exist");
        }
    }

    #[test]
    fn existing_tree_is_not_an_error() {
        let fs = Arc::new(
            MockFileSystemOps::new()
                .with_dir("/w/demo")
                .with_dir("/w/demo/src")
                .with_dir("/w/demo/include")
                .with_dir("/w/demo/build"),
        );
        let ctx = make_context(fs.clone(), false);
        assert_eq!(CreateProjectLayout.run(&ctx).unwrap(), TaskResult::Ok);
        assert!(fs.writes().is_empty());
    }

    #[test]
    fn file_at_project_root_is_a_collision() {
        let fs = Arc::new(MockFileSystemOps::new().with_file("/w/demo", "not a dir"));
        let ctx = make_context(fs, false);
        let err = CreateProjectLayout.run(&ctx).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenerateError>(),
            Some(GenerateError::Fs(FsError::NotADirectory(_)))
        ));
    }

    #[test]
    fn dry_run_creates_nothing() {
        let fs = Arc::new(MockFileSystemOps::new());
        let ctx = make_context(fs.clone(), true);
        assert_eq!(CreateProjectLayout.run(&ctx).unwrap(), TaskResult::DryRun);
        assert!(fs.writes().is_empty());
    }
}
