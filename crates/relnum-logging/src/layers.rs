// ABOUTME: Output layers for the relnum subscriber
// ABOUTME: A stderr layer in the configured format, a rolling file layer, and the level filter

use anyhow::{Context, Result};
use parking_lot::{Mutex, const_mutex};
use std::fs;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    registry::LookupSpan,
};

use crate::config::{ConsoleFormat, LoggingConfig};

/// A type-erased output layer for subscriber `S`
pub type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Daily log files kept next to the current one
const KEPT_LOG_FILES: usize = 5;

/// Flush guards for non-blocking file writers; they live for the process
static FILE_GUARDS: Mutex<Vec<WorkerGuard>> = const_mutex(Vec::new());

/// The stderr layer for `format`, or `None` when the console is off.
///
/// Stdout carries the rendered gutter, so nothing here writes to it.
pub fn console_layer<S>(format: ConsoleFormat) -> Option<BoxedLayer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = match format {
        ConsoleFormat::Off => return None,
        ConsoleFormat::Compact => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .boxed(),
        ConsoleFormat::Pretty => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .pretty()
            .boxed(),
        ConsoleFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
    };

    Some(layer)
}

/// A plain-text layer appending to `path`, rotated daily.
pub fn file_layer<S>(path: &Path) -> Result<BoxedLayer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Log file path {} has no file name", path.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .max_log_files(KEPT_LOG_FILES)
        .build(directory)
        .context("Failed to create rolling log file appender")?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    FILE_GUARDS.lock().push(guard);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .boxed();

    Ok(layer)
}

/// Every output `config` turns on.
pub fn output_layers<S>(config: &LoggingConfig) -> Result<Vec<BoxedLayer<S>>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let mut layers = Vec::new();

    if let Some(console) = console_layer(config.console) {
        layers.push(console);
    }

    if let Some(path) = &config.file {
        layers.push(file_layer(path)?);
    }

    Ok(layers)
}

/// The level filter shared by every output.
pub fn level_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directives = config.filter_directives();
    EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid filter directives '{directives}'"))
}
