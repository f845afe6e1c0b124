//! Log file location: explicit configuration first, platform default second.

use std::path::{MAIN_SEPARATOR, PathBuf};

use log::{debug, info};

use crate::config::LoggerSettings;
use crate::error::{LoggerError, Result};
use crate::platform::{ConfigSource, LogPaths};

const APP_DIR: &str = ".iam-core";
const LOG_FILE: &str = "application.log";
/// Suffix appended verbatim by deployments predating native path joining.
const LEGACY_SUFFIX: &str = "\\.iam-core\\application.log";

/// How the default location is assembled from the home directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathStyle {
    /// Join components with the platform separator.
    #[default]
    Native,
    /// Concatenate the backslash-separated suffix onto the home directory,
    /// matching log paths already deployed on every platform.
    Legacy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OsFamily {
    Windows,
    Mac,
    Unix,
}

impl OsFamily {
    fn sniff(os_name: &str) -> Option<Self> {
        let os = os_name.to_lowercase();
        if os.contains("win") {
            Some(OsFamily::Windows)
        } else if os.contains("mac") {
            Some(OsFamily::Mac)
        } else if os.contains("nix") || os.contains("nux") || os.contains("aix") {
            Some(OsFamily::Unix)
        } else {
            None
        }
    }
}

/// Resolves the default log location from an OS identifier and a home directory.
/// Both are injected so any platform can be simulated.
#[derive(Clone, Debug)]
pub struct OsNameResolver {
    os_name: String,
    home: Option<PathBuf>,
}

impl OsNameResolver {
    pub fn new(os_name: impl Into<String>, home: Option<PathBuf>) -> Self {
        Self {
            os_name: os_name.into(),
            home,
        }
    }

    pub fn resolve(&self, style: PathStyle) -> Result<PathBuf> {
        let family = OsFamily::sniff(&self.os_name)
            .ok_or_else(|| LoggerError::UnsupportedPlatform(self.os_name.clone()))?;
        let home = self.home.as_ref().ok_or(LoggerError::NoHomeDir)?;

        let path = match style {
            PathStyle::Native => {
                let base = match family {
                    OsFamily::Mac => home.join("Documents"),
                    OsFamily::Windows | OsFamily::Unix => home.clone(),
                };
                base.join(APP_DIR).join(LOG_FILE)
            }
            PathStyle::Legacy => {
                let home = home.to_string_lossy();
                match family {
                    OsFamily::Mac => {
                        PathBuf::from(format!("{home}{MAIN_SEPARATOR}Documents{LEGACY_SUFFIX}"))
                    }
                    OsFamily::Windows | OsFamily::Unix => {
                        PathBuf::from(format!("{home}{LEGACY_SUFFIX}"))
                    }
                }
            }
        };

        debug!(
            "Default log path for '{}' ({:?}, {:?}): {:?}",
            self.os_name, family, style, path
        );
        Ok(path)
    }
}

/// Paths of the running host, taken from `dirs` and the compile target.
#[derive(Clone, Debug, Default)]
pub struct PlatformPaths;

impl LogPaths for PlatformPaths {
    fn config_path(&self) -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("iam-core")
            .join("config.toml")
    }

    fn default_log_path(&self, style: PathStyle) -> Result<PathBuf> {
        OsNameResolver::new(std::env::consts::OS, dirs::home_dir()).resolve(style)
    }
}

impl LogPaths for OsNameResolver {
    fn config_path(&self) -> PathBuf {
        self.home
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    fn default_log_path(&self, style: PathStyle) -> Result<PathBuf> {
        self.resolve(style)
    }
}

/// Applies the precedence: non-empty `logger.path` verbatim, otherwise the platform default.
pub fn resolve_log_path(config: &dyn ConfigSource, paths: &dyn LogPaths) -> Result<PathBuf> {
    let settings = LoggerSettings::from_source(config)?;

    if let Some(path) = settings.path {
        info!("Using configured log path {:?}", path);
        return Ok(PathBuf::from(path));
    }

    paths.default_log_path(settings.style())
}
