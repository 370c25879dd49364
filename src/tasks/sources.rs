use anyhow::Result;

use super::{Context, Task, TaskResult, process_resources};
use crate::resources::FileResource;
use crate::templates;

/// Write the starter source file and, for C++, the precompiled header.
#[derive(Debug)]
pub struct WriteStarterSources;

impl Task for WriteStarterSources {
    fn name(&self) -> &str {
        "write starter sources"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resources = templates::source_files(&ctx.descriptor)
            .into_iter()
            .map(|f| FileResource::new(ctx.project_path(&f.path), f.contents, ctx.fs_ops.as_ref()));
        let stats = process_resources(ctx, resources, "write")?;
        Ok(stats.finish(ctx))
    }
}
