//! File-backed logging for the IAM core services.
//!
//! A [`FileLogger`] resolves the log file location once at startup, opens it for
//! appending and hands out cheap per-component [`Logger`] handles.

pub mod config;
pub mod error;
pub mod facade;
pub mod level;
pub mod logger;
pub mod paths;
pub mod record;
pub mod sink;

pub use config::{Config, LoggerSettings};
pub use error::{LoggerError, Result};
pub use facade::FacadeLogger;
pub use level::Level;
pub use logger::{FileLogger, Logger};
pub use paths::{OsNameResolver, PathStyle, PlatformPaths, resolve_log_path};
pub use record::LogRecord;
pub use sink::FileSink;

/// Interfaces that embedders implement to adapt the logger
/// without pulling in their own configuration or platform code.
pub mod platform {
    use std::path::PathBuf;

    /// Source of configuration values, looked up by dotted key (`logger.path`).
    pub trait ConfigSource {
        fn value(&self, key: &str) -> Option<String>;
    }

    /// Trait for platform-correct config and log locations.
    pub trait LogPaths {
        fn config_path(&self) -> PathBuf;
        fn default_log_path(&self, style: crate::PathStyle) -> crate::Result<PathBuf>;
    }

    impl ConfigSource for std::collections::HashMap<String, String> {
        fn value(&self, key: &str) -> Option<String> {
            self.get(key).cloned()
        }
    }
}
