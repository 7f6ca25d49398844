//! Tracing setup.
//!
//! Console logging goes to stderr so it never interleaves with the UI on
//! stdout. With `--log-file`, every record at DEBUG and above is also
//! appended to a file, one line per record:
//!
//! ```text
//! 2024-05-01 09:30:12,004:INFO:main.rs:84:Command started...
//! ```

use std::fmt;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::error::Result;

/// Timestamp layout of log-file records.
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Log-file record format: `time:LEVEL:file:line:message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptLogFormat;

/// Level name as written to the log file.
pub fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// Build the `time:LEVEL:file:line:` prefix of a record.
pub fn record_prefix(time: &str, level: &Level, file: Option<&str>, line: Option<u32>) -> String {
    let file = file
        .map(|f| {
            Path::new(f)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| f.to_string())
        })
        .unwrap_or_else(|| "?".to_string());

    format!(
        "{}:{}:{}:{}:",
        time,
        level_name(level),
        file,
        line.unwrap_or(0)
    )
}

impl<S, N> FormatEvent<S, N> for ScriptLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let time = chrono::Local::now().format(LOG_TIME_FORMAT).to_string();
        write!(
            writer,
            "{}",
            record_prefix(&time, meta.level(), meta.file(), meta.line())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Console filter for the given flags.
///
/// Log level is controlled by:
/// 1. `--debug` sets level to DEBUG
/// 2. `--verbose` sets level to INFO
/// 3. `RUST_LOG` environment variable (if set)
/// 4. Default is WARN
pub fn console_filter(debug: bool, verbose: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("venv_setup=debug")
    } else if verbose {
        EnvFilter::new("venv_setup=info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("venv_setup=warn"))
    }
}

/// Install the global tracing subscriber.
pub fn init_tracing(debug: bool, verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter(debug, verbose));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .event_format(ScriptLogFormat)
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// Run `f` bracketed by "Command started..." and "Finished command" records.
///
/// The closing record is written whether `f` succeeds or fails.
pub fn log_command<T>(name: &str, f: impl FnOnce() -> T) -> T {
    tracing::info!("Command started...");
    tracing::debug!("Running command {}", name);
    let result = f();
    tracing::info!("Finished command");
    result
}
