//! Task bookkeeping for the run summary, and the [`Log`] trait tasks log through.
use std::fmt;

/// Outcome of one task, as shown in the summary.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    /// Task name, e.g. `write build manifest`.
    pub name: String,
    /// Final status of the task.
    pub status: TaskStatus,
    /// Skip reason or error text.
    pub message: Option<String>,
}

impl TaskEntry {
    /// Summary line with the status icon and optional detail, colored.
    #[must_use]
    pub fn summary_line(&self) -> String {
        let detail = self
            .message
            .as_deref()
            .map_or_else(String::new, |m| format!(" ({m})"));
        format!(
            "{}{} {}{detail}\x1b[0m",
            self.status.color(),
            self.status.icon(),
            self.name
        )
    }
}

/// Status of a completed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task completed successfully.
    Ok,
    /// Task does not apply to this project (e.g. no package manager).
    NotApplicable,
    /// Task was skipped at runtime (e.g. repository initialization declined).
    Skipped,
    /// Task ran in dry-run mode; no changes were applied.
    DryRun,
    /// Task failed and stopped the pass.
    Failed,
}

impl TaskStatus {
    const fn icon(self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::NotApplicable => "·",
            Self::Skipped => "○",
            Self::DryRun => "~",
            Self::Failed => "✗",
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Self::Ok => "\x1b[32m",
            Self::NotApplicable => "\x1b[2m",
            Self::Skipped => "\x1b[33m",
            Self::DryRun => "\x1b[37m",
            Self::Failed => "\x1b[31m",
        }
    }

    /// Short lowercase label used in the log file and the tally.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotApplicable => "n/a",
            Self::Skipped => "skipped",
            Self::DryRun => "dry-run",
            Self::Failed => "failed",
        }
    }
}

const ALL_STATUSES: [TaskStatus; 5] = [
    TaskStatus::Ok,
    TaskStatus::NotApplicable,
    TaskStatus::Skipped,
    TaskStatus::DryRun,
    TaskStatus::Failed,
];

/// Per-status counts over a set of task entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskTally {
    counts: [usize; 5],
}

impl TaskTally {
    /// Count `entries` by status.
    #[must_use]
    pub fn of(entries: &[TaskEntry]) -> Self {
        let mut tally = Self::default();
        for entry in entries {
            if let Some(slot) = ALL_STATUSES
                .iter()
                .position(|s| *s == entry.status)
                .and_then(|i| tally.counts.get_mut(i))
            {
                *slot += 1;
            }
        }
        tally
    }

    /// Number of entries with `status`.
    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        ALL_STATUSES
            .iter()
            .position(|s| *s == status)
            .and_then(|i| self.counts.get(i).copied())
            .unwrap_or(0)
    }

    /// Total number of entries.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl fmt::Display for TaskTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tasks:", self.total())?;
        for (i, status) in ALL_STATUSES.iter().enumerate() {
            let sep = if i == 0 { "" } else { "," };
            write!(
                f,
                "{sep} {}{} {}\x1b[0m",
                status.color(),
                self.count(*status),
                status.label()
            )?;
        }
        Ok(())
    }
}

/// Logging backend used by tasks, so task code does not depend on [`Logger`](super::Logger).
pub trait Log: Send + Sync + std::fmt::Debug {
    /// Log a stage header (one per task).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (console only when verbose).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log what a dry run would have done.
    fn dry_run(&self, msg: &str);
    /// Record a task result for the summary.
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>);
}
