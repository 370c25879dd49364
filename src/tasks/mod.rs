//! Named tasks that make up a generation pass.
pub mod layout;
pub mod manifest;
pub mod repository;
pub mod sources;
pub mod vcpkg;

mod context;
mod processing;

pub use context::Context;
pub use processing::{TaskResult, TaskStats, process_resources};

use anyhow::Result;

use crate::logging::TaskStatus;

/// A named, executable task.
pub trait Task: Send + Sync {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Whether this task applies to the project being generated.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if a filesystem write or an external tool fails.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Every task of a generation pass, in execution order.
#[must_use]
pub fn all_generate_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(layout::CreateProjectLayout),
        Box::new(manifest::WriteBuildManifest),
        Box::new(vcpkg::BootstrapVcpkg),
        Box::new(vcpkg::WriteVcpkgManifest),
        Box::new(sources::WriteStarterSources),
        Box::new(repository::InitializeRepository),
    ]
}

/// Execute a task, recording the result in the logger.
///
/// # Errors
///
/// Returns the task's error unchanged after recording it as failed.
pub fn execute(task: &dyn Task, ctx: &Context) -> Result<()> {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not applicable)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return Ok(());
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
            Ok(())
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
            Ok(())
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
            Ok(())
        }
        Err(e) => {
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
            Err(e)
        }
    }
}

/// Run `tasks` in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first task error.
pub fn execute_all(tasks: &[Box<dyn Task>], ctx: &Context) -> Result<()> {
    for task in tasks {
        execute(task.as_ref(), ctx)?;
    }
    Ok(())
}
