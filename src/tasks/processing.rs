//! Generic resource processing loop: check state, apply, collect stats.

use anyhow::Result;

use super::context::Context;
use crate::error::GenerateError;
use crate::resources::{Resource, ResourceChange, ResourceState};

/// Result of a single task execution.
///
/// # Examples
///
/// ```
/// use cppgen::tasks::TaskResult;
///
/// let skipped = TaskResult::Skipped("declined".into());
/// assert!(matches!(skipped, TaskResult::Skipped(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// Task completed successfully.
    Ok,
    /// Task was skipped at runtime.
    Skipped(String),
    /// Task ran in dry-run mode.
    DryRun,
}

/// Counters for tasks that process several resources.
///
/// # Examples
///
/// ```
/// use cppgen::tasks::TaskStats;
///
/// let stats = TaskStats { changed: 2, already_ok: 1 };
/// assert_eq!(stats.summary(false), "2 changed, 1 already ok");
/// assert_eq!(stats.summary(true), "2 would change, 1 already ok");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    /// Number of resources created or updated.
    pub changed: u32,
    /// Number of resources already in the desired state.
    pub already_ok: u32,
}

impl TaskStats {
    /// Format the summary string.
    #[must_use]
    pub fn summary(&self, dry_run: bool) -> String {
        let verb = if dry_run { "would change" } else { "changed" };
        format!("{} {verb}, {} already ok", self.changed, self.already_ok)
    }

    /// Log the summary and return the appropriate `TaskResult`.
    #[must_use]
    pub fn finish(self, ctx: &Context) -> TaskResult {
        ctx.log.info(&self.summary(ctx.dry_run));
        if ctx.dry_run {
            TaskResult::DryRun
        } else {
            TaskResult::Ok
        }
    }
}

/// Check and apply each resource in order.
///
/// Correct resources are left alone.  Missing or incorrect ones are applied,
/// or only reported in dry-run mode.  The first invalid resource or failed
/// apply aborts with a [`GenerateError::Fs`].
///
/// # Errors
///
/// Returns an error if a resource is invalid or cannot be applied.
pub fn process_resources<R: Resource>(
    ctx: &Context,
    resources: impl IntoIterator<Item = R>,
    verb: &str,
) -> Result<TaskStats> {
    let mut stats = TaskStats::default();
    for resource in resources {
        let desc = resource.description();
        match resource.current_state().map_err(GenerateError::from)? {
            ResourceState::Correct => {
                ctx.log.debug(&format!("ok: {desc}"));
                stats.already_ok += 1;
            }
            ResourceState::Invalid { reason } => {
                ctx.log.debug(&format!("cannot {verb} {desc}: {reason}"));
                return Err(GenerateError::from(resource.conflict(&reason)).into());
            }
            state @ (ResourceState::Missing | ResourceState::Incorrect { .. }) => {
                if ctx.dry_run {
                    let msg = if let ResourceState::Incorrect { current } = state {
                        format!("would {verb} {desc} (currently {current})")
                    } else {
                        format!("would {verb} {desc}")
                    };
                    ctx.log.dry_run(&msg);
                    stats.changed += 1;
                    continue;
                }
                match resource.apply().map_err(GenerateError::from)? {
                    ResourceChange::Applied => {
                        ctx.log.debug(&format!("{verb}: {desc}"));
                        stats.changed += 1;
                    }
                    ResourceChange::AlreadyCorrect => stats.already_ok += 1,
                }
            }
        }
    }
    Ok(stats)
}
