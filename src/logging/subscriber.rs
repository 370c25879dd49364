//! Tracing subscriber: a colored console layer and a plain-text run log.
use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::Level;

use super::utils::{format_utc_datetime, format_utc_time, log_file_path, strip_ansi};

/// Target of stage-header events.
pub(super) const STAGE_TARGET: &str = "cppgen::stage";
/// Target of dry-run events.
pub(super) const DRY_RUN_TARGET: &str = "cppgen::dry_run";

/// Environment variable holding a console filter directive, e.g. `debug`.
pub const FILTER_ENV: &str = "CPPGEN_LOG";

/// How an event is presented, derived from its level and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Stage,
    DryRun,
    Info,
    Debug,
    Warn,
    Error,
}

impl LineKind {
    fn of(metadata: &tracing::Metadata<'_>) -> Self {
        match (*metadata.level(), metadata.target()) {
            (Level::ERROR, _) => Self::Error,
            (Level::WARN, _) => Self::Warn,
            (Level::INFO, STAGE_TARGET) => Self::Stage,
            (Level::INFO, DRY_RUN_TARGET) => Self::DryRun,
            (Level::INFO, _) => Self::Info,
            _ => Self::Debug,
        }
    }

    fn console(self, text: &str) -> String {
        match self {
            Self::Stage => format!("\x1b[1;34m==>\x1b[0m \x1b[1m{text}\x1b[0m"),
            Self::DryRun => format!("  \x1b[33m[DRY RUN]\x1b[0m {text}"),
            Self::Info => format!("  {text}"),
            Self::Debug => format!("  \x1b[2m{text}\x1b[0m"),
            Self::Warn => format!("\x1b[33mWARN\x1b[0m  {text}"),
            Self::Error => format!("\x1b[31mERROR\x1b[0m {text}"),
        }
    }

    fn plain(self, text: &str) -> String {
        let ts = format_utc_time();
        match self {
            Self::Stage => format!("[{ts}] ==> {text}"),
            Self::DryRun => format!("[{ts}]     [dry run] {text}"),
            Self::Info => format!("[{ts}]     {text}"),
            Self::Debug => format!("[{ts}]     [debug] {text}"),
            Self::Warn => format!("[{ts}]     [warn] {text}"),
            Self::Error => format!("[{ts}]     [error] {text}"),
        }
    }
}

/// Event text: the `message` field followed by any other fields as `key=value`.
#[derive(Default)]
struct EventText {
    message: String,
    fields: String,
}

impl EventText {
    fn of(event: &tracing::Event<'_>) -> String {
        let mut text = Self::default();
        event.record(&mut text);
        text.message + &text.fields
    }

    fn push(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

impl tracing::field::Visit for EventText {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.push(field, &format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.push(field, value);
    }
}

/// Handle to the run log file.
///
/// Lines are held in memory until [`open`](Self::open) creates the file, so a
/// run that fails validation leaves no trace on disk.
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
    sink: Arc<Mutex<Sink>>,
}

#[derive(Debug)]
enum Sink {
    Pending(Vec<String>),
    Open(fs::File),
    Unavailable,
}

impl RunLog {
    /// A run log for `path` that buffers until opened.
    pub(super) fn new(path: PathBuf) -> Self {
        Self {
            path,
            sink: Arc::new(Mutex::new(Sink::Pending(Vec::new()))),
        }
    }

    /// Log file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` once the file has been created.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.sink
            .lock()
            .is_ok_and(|sink| matches!(*sink, Sink::Open(_)))
    }

    /// Create the file and its directory, write the run header, then flush
    /// buffered lines.  Later calls only report whether the file is open.
    #[must_use]
    pub fn open(&self) -> bool {
        let Ok(mut sink) = self.sink.lock() else {
            return false;
        };
        if let Sink::Pending(lines) = &mut *sink {
            let pending = std::mem::take(lines);
            *sink = Self::create(&self.path, &pending).map_or(Sink::Unavailable, Sink::Open);
        }
        matches!(*sink, Sink::Open(_))
    }

    fn create(path: &Path, pending: &[String]) -> Option<fs::File> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).ok()?;
        }
        let version =
            option_env!("CPPGEN_VERSION").unwrap_or(concat!("dev-", env!("CARGO_PKG_VERSION")));
        let mut file = fs::File::create(path).ok()?;
        writeln!(
            file,
            "# cppgen {version}\n# run started {} UTC",
            format_utc_datetime()
        )
        .ok()?;
        for line in pending {
            writeln!(file, "{line}").ok()?;
        }
        Some(file)
    }

    fn append(&self, line: String) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        match &mut *sink {
            Sink::Pending(lines) => lines.push(line),
            Sink::Open(file) => {
                writeln!(file, "{line}").ok();
            }
            Sink::Unavailable => {}
        }
    }
}

/// Layer that feeds every event to a [`RunLog`], without ANSI codes.
#[derive(Debug)]
pub(super) struct RunLogLayer {
    log: RunLog,
}

impl RunLogLayer {
    pub(super) const fn new(log: RunLog) -> Self {
        Self { log }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for RunLogLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        self.log
            .append(LineKind::of(event.metadata()).plain(&strip_ansi(&EventText::of(event))));
    }
}

struct ConsoleFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let line = LineKind::of(event.metadata()).console(&EventText::of(event));
        writeln!(writer, "{line}")
    }
}

/// Install the global [`tracing`] subscriber and return the run log handle.
///
/// Warnings and errors go to stderr, everything else to stdout.  The console
/// shows `INFO` and above, or `DEBUG` with `verbose`; a directive in
/// `CPPGEN_LOG` overrides both.  The run log records `DEBUG` and above for
/// `$XDG_CACHE_HOME/cppgen/generate.log` but creates nothing until
/// [`RunLog::open`] is called.  Call once, before any logging.
#[must_use]
pub fn init_subscriber(verbose: bool) -> Option<RunLog> {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        EnvFilter, Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let console_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(FILTER_ENV)
        .from_env_lossy();

    let make_writer = std::io::stderr
        .with_max_level(Level::WARN)
        .and(std::io::stdout.with_min_level(Level::INFO));

    let console_layer = fmt::layer()
        .event_format(ConsoleFormatter)
        .with_writer(make_writer)
        .with_filter(console_filter);

    let run_log = log_file_path().map(RunLog::new);
    let run_log_layer = run_log
        .clone()
        .map(|log| RunLogLayer::new(log).with_filter(LevelFilter::DEBUG));

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(run_log_layer)
        .try_init();
    run_log
}
