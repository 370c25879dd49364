use anyhow::Result;

use super::{Context, Task, TaskResult, process_resources};
use crate::error::GenerateError;
use crate::resources::FileResource;
use crate::templates::{self, vcs};

/// Question asked before initializing version control.
pub const QUESTION: &str = "Do you want to initialize Git version control? (y/n): ";

/// Initialize a git repository with ignore and attributes files, if the user agrees.
#[derive(Debug)]
pub struct InitializeRepository;

impl Task for InitializeRepository {
    fn name(&self) -> &str {
        "initialize repository"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let dir = &ctx.project_dir;

        if ctx.dry_run {
            ctx.log.dry_run(&format!(
                "would ask to run git init in {} and add {}",
                dir.display(),
                vcs::FILES.join(", ")
            ));
            return Ok(TaskResult::DryRun);
        }

        if !ctx.prompt.confirm(QUESTION)? {
            return Ok(TaskResult::Skipped("declined".to_string()));
        }

        ctx.tools
            .init_repository(dir)
            .map_err(GenerateError::from)?;

        let resources = templates::vcs_files()
            .into_iter()
            .map(|f| FileResource::new(ctx.project_path(&f.path), f.contents, ctx.fs_ops.as_ref()));
        process_resources(ctx, resources, "write")?;

        if let Err(e) = ctx.tools.add_files(dir, &vcs::FILES) {
            ctx.log
                .warn(&format!("failed to add {}: {e}", vcs::FILES.join(", ")));
            return Ok(TaskResult::Ok);
        }

        ctx.log.info(&format!(
            "git repository initialized with {}",
            vcs::FILES.join(" and ")
        ));
        Ok(TaskResult::Ok)
    }
}
