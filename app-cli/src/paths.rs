use std::path::PathBuf;

use iam_logger_core::platform::LogPaths;
use iam_logger_core::{PathStyle, PlatformPaths, Result};

/// Platform paths, with the config file optionally overridden from the command line.
#[derive(Default)]
pub struct CliPaths {
    config: Option<PathBuf>,
}

impl CliPaths {
    pub fn new(config: Option<PathBuf>) -> Self {
        Self { config }
    }
}

impl LogPaths for CliPaths {
    fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PlatformPaths.config_path())
    }

    fn default_log_path(&self, style: PathStyle) -> Result<PathBuf> {
        PlatformPaths.default_log_path(style)
    }
}
