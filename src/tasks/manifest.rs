use anyhow::Result;

use super::{Context, Task, TaskResult, process_resources};
use crate::resources::FileResource;
use crate::templates;

/// Write `CMakeLists.txt`.
#[derive(Debug)]
pub struct WriteBuildManifest;

impl Task for WriteBuildManifest {
    fn name(&self) -> &str {
        "write build manifest"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let file = templates::build_manifest(&ctx.descriptor);
        let resource = FileResource::new(
            ctx.project_path(&file.path),
            file.contents,
            ctx.fs_ops.as_ref(),
        );
        let stats = process_resources(ctx, [resource], "write")?;
        Ok(stats.finish(ctx))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::MockFileSystemOps;
    use crate::tasks::test_helpers::make_context;
    use std::path::Path;
    use std::sync::Arc;

    #[test]
    fn writes_cmake_lists() {
        let fs = Arc::new(MockFileSystemOps::new().with_dir("/w/demo"));
        let ctx = make_context(fs.clone(), false);
        WriteBuildManifest.run(&ctx).unwrap();
        let contents = fs.file(Path::new("/w/demo/CMakeLists.txt")).unwrap();
        assert!(contents.contains("add_executable(demo src/main.cpp)"));
    }

    #[test]
    fn stale_manifest_is_overwritten() {
        let fs = Arc::new(MockFileSystemOps::new().with_file("/w/demo/CMakeLists.txt", "stale"));
        let ctx = make_context(fs.clone(), false);
        WriteBuildManifest.run(&ctx).unwrap();
        assert_ne!(
            fs.file(Path::new("/w/demo/CMakeLists.txt")).as_deref(),
            Some("stale")
        );
    }
}
