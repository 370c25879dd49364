//! Logging infrastructure for structured console and file output.

mod logger;
mod subscriber;
mod types;
mod utils;

pub use logger::Logger;
pub use subscriber::{RunLog, init_subscriber};
pub use types::{Log, TaskEntry, TaskStatus, TaskTally};

/// Install a thread-local subscriber that feeds a not-yet-opened [`RunLog`]
/// at `path`.
///
/// Keep the returned guard alive for the duration of the test; dropping it
/// restores the previous thread-local dispatcher.
#[cfg(test)]
pub(crate) fn pending_run_log(
    path: std::path::PathBuf,
) -> (RunLog, tracing::dispatcher::DefaultGuard) {
    use tracing_subscriber::{Layer as _, filter::LevelFilter, layer::SubscriberExt as _};
    let run_log = RunLog::new(path);
    let subscriber = tracing_subscriber::registry().with(
        subscriber::RunLogLayer::new(run_log.clone()).with_filter(LevelFilter::DEBUG),
    );
    let guard = tracing::dispatcher::set_default(&tracing::Dispatch::new(subscriber));
    (run_log, guard)
}

/// Create a Logger with an open run log in a fresh temp directory.
#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) fn isolated_logger() -> (Logger, tempfile::TempDir, tracing::dispatcher::DefaultGuard) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let (run_log, guard) = pending_run_log(tmp.path().join(utils::LOG_FILE_NAME));
    let log = Logger::with_run_log(Some(run_log));
    log.open_run_log();
    (log, tmp, guard)
}
