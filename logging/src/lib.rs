use std::error::Error;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    JSON,
    Compact,
    Full,
    Plain,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "json" => Ok(OutputFormat::JSON),
            "compact" => Ok(OutputFormat::Compact),
            "full" => Ok(OutputFormat::Full),
            "plain" => Ok(OutputFormat::Plain),
            s => Err(format!("Invalid DEV_LOG_FORMAT env var value {:?}", s)),
        }
    }
}

/// Configure `log` and `slog` to emit to stdout.
///
/// `filters` sets the global and per-module levels, with
/// [slog_envlogger](https://docs.rs/slog-envlogger/2.2.0/slog_envlogger/) syntax.
/// Rules from the `RUST_LOG` environment variable are applied after them.
///
/// Release binaries log JSON.  Debug binaries read `DEV_LOG_FORMAT`:
/// - `"json"` or `""` for JSON.
/// - `"compact"` to print scope variables once and indent the messages inside the scope.
/// - `"full"` to print scope variables on every line, with color.
/// - `"plain"` to print without color.
///
/// ```no_run
/// let _global_logger_guard = logging::configure("info,cutiter::dotted=debug").unwrap();
/// logging::info!("checked"; "input" => "a.0");
/// log::debug!("routed through slog too");
/// ```
///
/// Example output:
/// ```json
/// {"time_ns":1585851354242507000,"time":"2020-04-02T18:15:54.242521000Z", \
/// "module":"check_dotted","level":"INFO","message":"valid","input":"a.0"}
/// ```
pub fn configure(filters: &str) -> Result<slog_scope::GlobalLoggerGuard, Box<dyn Error>> {
    configure_inner(filters, output_format_from_env()?)
}

fn output_format_from_env() -> Result<OutputFormat, Box<dyn Error>> {
    if !cfg!(debug_assertions) {
        return Ok(OutputFormat::JSON);
    }
    match std::env::var("DEV_LOG_FORMAT") {
        Ok(s) => Ok(s.parse()?),
        Err(std::env::VarError::NotPresent) => Ok(OutputFormat::JSON),
        Err(e) => Err(e.into()),
    }
}

/// Configures `log` and `slog` to emit to stdout with "plain" format.
/// Only the first call in a process configures anything.  Later calls return the first call's
/// outcome, so a failed setup keeps failing, and keep the first call's filters.
/// The `GlobalLoggerGuard` is leaked.
pub fn configure_for_test(filters: &str) -> Result<(), Box<dyn Error>> {
    static OUTCOME: OnceLock<Result<(), String>> = OnceLock::new();
    OUTCOME
        .get_or_init(|| configure_test_outcome(configure_inner(filters, OutputFormat::Plain)))
        .clone()
        .map_err(Into::into)
}

fn configure_test_outcome(
    result: Result<slog_scope::GlobalLoggerGuard, Box<dyn Error>>,
) -> Result<(), String> {
    match result {
        Ok(global_logger_guard) => {
            Box::leak(Box::new(global_logger_guard));
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

fn configure_inner(
    filters: &str,
    output_format: OutputFormat,
) -> Result<slog_scope::GlobalLoggerGuard, Box<dyn Error>> {
    let time_ns_fn = |_: &slog::Record| {
        std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            // Zero if system time is before epoch.
            .unwrap_or_default()
            // Nanoseconds overflow u64 in the year 2554.
            .as_nanos() as u64
    };
    let time_fn =
        |_: &slog::Record| chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Nanos, true);
    let module_fn = |record: &slog::Record| record.module();
    let level_fn = |record: &slog::Record| match record.level() {
        slog::Level::Critical | slog::Level::Error => "ERROR",
        slog::Level::Warning => "WARN",
        slog::Level::Info => "INFO",
        slog::Level::Debug => "DEBUG",
        slog::Level::Trace => "TRACE",
    };
    let message_fn = |record: &slog::Record| record.msg().to_string();
    let write_timestamp_fn = |w: &mut dyn std::io::Write| {
        w.write_all(
            chrono::Local::now()
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
                .as_bytes(),
        )
    };
    let drain: Box<dyn slog::Drain<Ok = (), Err = std::io::Error> + Send> = match output_format {
        OutputFormat::JSON => Box::new(
            slog_json::Json::new(std::io::stdout())
                .add_key_value(slog::o!(
                    // Fields are in reverse order.
                    "message" => slog::FnValue(message_fn),
                    "level" => slog::FnValue(level_fn),
                    "module" => slog::FnValue(module_fn),
                    "time" => slog::FnValue(time_fn),
                    "time_ns" => slog::FnValue(time_ns_fn),
                ))
                .build(),
        ),
        OutputFormat::Compact => Box::new(
            slog_term::CompactFormat::new(slog_term::TermDecorator::new().build())
                .use_custom_timestamp(write_timestamp_fn)
                .build(),
        ),
        OutputFormat::Full => Box::new(
            slog_term::FullFormat::new(slog_term::TermDecorator::new().build())
                .use_custom_timestamp(write_timestamp_fn)
                .build(),
        ),
        OutputFormat::Plain => Box::new(
            slog_term::FullFormat::new(slog_term::PlainDecorator::new(std::io::stdout()))
                .use_custom_timestamp(write_timestamp_fn)
                .build(),
        ),
    };
    let rust_log = match std::env::var("RUST_LOG") {
        Ok(x) => x,
        Err(std::env::VarError::NotPresent) => String::new(),
        Err(e) => return Err(e.into()),
    };
    let drain = slog_envlogger::LogBuilder::new(drain)
        .parse(filters)
        .parse(&rust_log)
        .build();
    let drain = slog::Fuse(std::sync::Mutex::new(drain));
    let drain = slog::Fuse(slog_async::Async::default(drain));
    let logger = slog::Logger::root(drain, slog::o!());
    let guard = slog_scope::set_global_logger(logger);
    slog_stdlog::init()?;
    log_panics::init();
    Ok(guard)
}

/// Runs `f` with a logger that adds `"thread" => name` to every record.
pub fn thread_scope<SF, R>(name: &str, f: SF) -> R
where
    SF: FnOnce() -> R,
{
    let logger = slog_scope::logger().new(slog::o!("thread" => String::from(name)));
    slog_scope::scope(&logger, f)
}

#[macro_export]
macro_rules! error (
    ($($args:tt)+) => { slog::error!(slog_scope::logger(), $($args)+) };
);
#[macro_export]
macro_rules! warn (
    ($($args:tt)+) => { slog::warn!(slog_scope::logger(), $($args)+) };
);
#[macro_export]
macro_rules! info (
    ($($args:tt)+) => { slog::info!(slog_scope::logger(), $($args)+) };
);
#[macro_export]
macro_rules! debug (
    ($($args:tt)+) => { slog::debug!(slog_scope::logger(), $($args)+) };
);
#[macro_export]
macro_rules! trace (
    ($($args:tt)+) => { slog::trace!(slog_scope::logger(), $($args)+) };
);
