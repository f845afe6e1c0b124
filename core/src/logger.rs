//! Per-component logger handles and the service that owns the shared sink.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::error::Result;
use crate::level::Level;
use crate::paths::resolve_log_path;
use crate::platform::{ConfigSource, LogPaths};
use crate::record::{LogRecord, render_cause};
use crate::sink::FileSink;

/// Owns the process-wide sink from startup to shutdown.
/// Create one early in `main()` and hand out [`Logger`]s from it.
pub struct FileLogger {
    sink: Arc<FileSink>,
}

impl FileLogger {
    /// Resolves the log path and opens the sink, returning the first failure.
    pub fn try_init(config: &dyn ConfigSource, paths: &dyn LogPaths) -> Result<Self> {
        let path = resolve_log_path(config, paths)?;
        let sink = FileSink::open(&path)?;
        info!("Logging to {:?}", path);
        Ok(Self::with_sink(Arc::new(sink)))
    }

    /// Like [`try_init`](Self::try_init), but a failure is reported on the console
    /// and the logger continues with a disabled sink.
    /// A disabled sink keeps the resolved path when resolution succeeded.
    pub fn init(config: &dyn ConfigSource, paths: &dyn LogPaths) -> Self {
        let path = match resolve_log_path(config, paths) {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Failed to resolve the log file path, logging is disabled: {e}");
                return Self::with_sink(Arc::new(FileSink::disabled("")));
            }
        };

        match FileSink::open(&path) {
            Ok(sink) => {
                info!("Logging to {:?}", path);
                Self::with_sink(Arc::new(sink))
            }
            Err(e) => {
                eprintln!("Failed to open the log file in {path:?}, logging is disabled: {e}");
                Self::with_sink(Arc::new(FileSink::disabled(path)))
            }
        }
    }

    pub fn with_sink(sink: Arc<FileSink>) -> Self {
        Self { sink }
    }

    pub fn logger(&self, component: impl Into<String>) -> Logger {
        Logger::new(component, self.sink.clone())
    }

    /// Handle named after `T`'s full type path.
    pub fn logger_for<T: ?Sized>(&self) -> Logger {
        self.logger(std::any::type_name::<T>())
    }

    pub fn sink(&self) -> Arc<FileSink> {
        self.sink.clone()
    }

    pub fn path(&self) -> &Path {
        self.sink.path()
    }

    pub fn close(self) {
        self.sink.flush();
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        self.sink.flush();
    }
}

/// Lightweight, cloneable handle bound to one component name.
#[derive(Clone, Debug)]
pub struct Logger {
    component: String,
    sink: Arc<FileSink>,
}

impl Logger {
    pub fn new(component: impl Into<String>, sink: Arc<FileSink>) -> Self {
        Self {
            component: component.into(),
            sink,
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn log(&self, level: Level, message: &str) {
        let record = LogRecord::now(level, &self.component, message);
        self.sink.write_line(&record.to_string());
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Writes the ERROR line, then the cause and its source chain.
    pub fn error_with_cause(&self, message: &str, cause: &dyn Error) {
        let record = LogRecord::now(Level::Error, &self.component, message);
        self.sink.write_block(&record.to_string(), &render_cause(cause));
    }
}
