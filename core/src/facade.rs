//! Bridge from the `log` crate macros into the shared sink.

use std::sync::Arc;

use log::{LevelFilter, Metadata, Record};

use crate::error::Result;
use crate::level::Level;
use crate::record::LogRecord;
use crate::sink::FileSink;

/// `log::Log` implementation; the record target becomes the component name.
pub struct FacadeLogger {
    sink: Arc<FileSink>,
    max_level: LevelFilter,
}

impl FacadeLogger {
    pub fn new(sink: Arc<FileSink>, max_level: LevelFilter) -> Self {
        Self { sink, max_level }
    }

    /// Installs the bridge as the global logger. Typically called early in `main()`.
    pub fn install(sink: Arc<FileSink>, max_level: LevelFilter) -> Result<()> {
        log::set_boxed_logger(Box::new(Self::new(sink, max_level)))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for FacadeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        let line = LogRecord::now(Level::from(record.level()), record.target(), &message);
        self.sink.write_line(&line.to_string());
    }

    fn flush(&self) {
        self.sink.flush();
    }
}
