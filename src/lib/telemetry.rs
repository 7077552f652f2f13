//! Logger construction and run-level telemetry helpers.
//!
//! The logger is an explicit [`Dispatch`] built from [`LogSettings`]. Callers
//! install it for the duration of a run with
//! [`tracing::dispatcher::with_default`]; no global subscriber is registered.

use std::{
    io,
    path::Path,
    sync::{Arc, Mutex},
};

use clap::ValueEnum;
use tracing::{info, level_filters::LevelFilter, Dispatch, Event, Subscriber};
use tracing_subscriber::{
    fmt,
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields, MakeWriter},
    registry::LookupSpan,
};

/// Maximum severity written by the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn as_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Line layout of log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// `LEVEL: message`, no timestamp or target.
    #[default]
    Plain,
    /// Timestamp, target, and source location.
    Full,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(LogFormat::Plain),
            "full" => Some(LogFormat::Full),
            _ => None,
        }
    }
}

/// Resolved logger configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}

/// Build a logger that writes to stderr.
pub fn build_dispatch(settings: LogSettings) -> Dispatch {
    build_dispatch_with_writer(settings, std::io::stderr)
}

/// Build a logger that writes to an arbitrary writer.
pub fn build_dispatch_with_writer<W>(settings: LogSettings, writer: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = fmt()
        .with_max_level(settings.level.as_filter())
        .with_ansi(false)
        .with_writer(writer);

    match settings.format {
        LogFormat::Plain => Dispatch::new(builder.event_format(PlainFormat).finish()),
        LogFormat::Full => Dispatch::new(
            builder
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .finish(),
        ),
    }
}

/// `LEVEL: message fields`, one event per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormat;

impl<S, N> FormatEvent<S, N> for PlainFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{}: ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// In-memory log sink shared between the logger and its reader.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let bytes = match self.0.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log buffer lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Emit the parameters a run starts with.
pub fn emit_run_started(root: &Path, checks: usize, remediation_tool: &str) {
    info!(
        target: "flash_size_check::runtime",
        root = %root.display(),
        checks,
        remediation_tool,
        "Checking whether the embedded flash size has been reduced"
    );
}
