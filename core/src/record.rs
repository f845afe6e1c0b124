//! Rendering of a single log line and of error causes.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt::{self, Write};

use chrono::{DateTime, Local};

use crate::level::Level;

/// `yyyy-MM-dd_HH:mm:ss.SSS` in local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S%.3f";

/// One log event. Rendered immediately, never stored.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub component: &'a str,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn now(level: Level, component: &'a str, message: &'a str) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            component,
            message,
        }
    }
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.component,
            self.message
        )
    }
}

/// Renders an error and its `source()` chain as an unstructured block.
/// When `RUST_BACKTRACE` enables capture, the logging call site follows under `logged at:`.
pub fn render_cause(cause: &dyn Error) -> String {
    let mut out = render_chain(cause);

    let backtrace = Backtrace::capture();
    if backtrace.status() == BacktraceStatus::Captured {
        let _ = write!(out, "\nlogged at:\n{backtrace}");
    }
    out
}

fn render_chain(cause: &dyn Error) -> String {
    let mut out = cause.to_string();
    let mut source = cause.source();
    while let Some(err) = source {
        let _ = write!(out, "\n\tcaused by: {err}");
        source = err.source();
    }
    out
}
