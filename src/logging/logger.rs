//! Structured logger with dry-run awareness and summary collection.
use std::path::Path;
use std::sync::Mutex;

use super::subscriber::{DRY_RUN_TARGET, RunLog, STAGE_TARGET};
use super::types::{Log, TaskEntry, TaskStatus, TaskTally};

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger with dry-run awareness and summary collection.
///
/// Messages are emitted as [`tracing`] events.  The subscriber installed by
/// [`init_subscriber`](super::init_subscriber) also feeds every event to the
/// [`RunLog`], regardless of the verbose flag.
#[derive(Debug, Default)]
pub struct Logger {
    tasks: Mutex<Vec<TaskEntry>>,
    run_log: Option<RunLog>,
}

impl Logger {
    /// Create a logger without a run log.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_run_log(None)
    }

    /// Create a logger that opens and reports `run_log`.
    #[must_use]
    pub const fn with_run_log(run_log: Option<RunLog>) -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            run_log,
        }
    }

    /// Create the run log file, flushing what was logged so far.
    ///
    /// Called once the project options are known to be valid.
    pub fn open_run_log(&self) {
        if let Some(run_log) = &self.run_log
            && !run_log.open()
        {
            self.warn(&format!(
                "cannot write run log {}",
                run_log.path().display()
            ));
        }
    }

    /// Path of the run log, once it has been created.
    #[must_use]
    pub fn log_path(&self) -> Option<&Path> {
        self.run_log
            .as_ref()
            .filter(|log| log.is_open())
            .map(RunLog::path)
    }

    /// Return a clone of all recorded task entries.
    #[must_use]
    pub fn task_entries(&self) -> Vec<TaskEntry> {
        self.tasks.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (console only when verbose; always in the log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Record a task result for the summary.
    ///
    /// The result is also written to the run log as a structured debug event.
    pub fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        tracing::debug!(task = name, status = status.label(), "task finished");
        if let Ok(mut guard) = self.tasks.lock() {
            guard.push(TaskEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Number of failed tasks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        TaskTally::of(&self.task_entries()).count(TaskStatus::Failed)
    }

    /// Print one line per recorded task, the tally, and the log file path.
    pub fn print_summary(&self) {
        let tasks = self.task_entries();
        if tasks.is_empty() {
            return;
        }

        self.stage("Summary");
        for task in &tasks {
            self.info(&task.summary_line());
        }
        self.info(&TaskTally::of(&tasks).to_string());

        if let Some(path) = self.log_path() {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        self.record_task(name, status, message);
    }
}
