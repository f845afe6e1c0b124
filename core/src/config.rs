//! Configuration loading.
//! Uses injected `LogPaths` so embedders control where the file lives.

use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::str::FromStr;

use crate::error::{LoggerError, Result};
use crate::paths::PathStyle;
use crate::platform::{ConfigSource, LogPaths};

pub const LOGGER_PATH_KEY: &str = "logger.path";
pub const LOGGER_LEGACY_PATHS_KEY: &str = "logger.legacy_paths";

/// The `[logger]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    pub path: Option<String>,
    pub legacy_paths: bool,
}

impl LoggerSettings {
    /// Reads the logger keys from any configuration source. An empty path counts as unset.
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self> {
        let path = source.value(LOGGER_PATH_KEY).filter(|p| !p.is_empty());

        let legacy_paths = match source.value(LOGGER_LEGACY_PATHS_KEY) {
            None => false,
            Some(raw) => raw.trim().parse::<bool>().map_err(|_| {
                LoggerError::config(format!(
                    "{LOGGER_LEGACY_PATHS_KEY} must be true or false, got '{raw}'"
                ))
            })?,
        };

        Ok(Self { path, legacy_paths })
    }

    pub fn style(&self) -> PathStyle {
        if self.legacy_paths {
            PathStyle::Legacy
        } else {
            PathStyle::Native
        }
    }
}

/// Parsed TOML configuration, queried by dotted key.
#[derive(Debug, Clone, Default)]
pub struct Config {
    values: toml::Table,
}

impl Config {
    /// Load configuration from the provided paths. A missing file yields an empty configuration.
    pub fn load_with(paths: &dyn LogPaths) -> Result<Self> {
        let config_path = paths.config_path();

        if !config_path.exists() {
            info!(
                "Config file not found at {:?}, using platform defaults",
                config_path
            );
            return Ok(Self::default());
        }

        debug!("Loading config from {:?}", config_path);
        let content = fs::read_to_string(&config_path)?;
        content.parse()
    }

    /// Returns the value for `key`, or an empty string when it is not set.
    pub fn get_value(&self, key: &str) -> String {
        self.value(key).unwrap_or_default()
    }

    pub fn logger_settings(&self) -> Result<LoggerSettings> {
        LoggerSettings::from_source(self)
    }

    fn from_toml_value(value: toml::Value) -> Result<Self> {
        let toml::Value::Table(values) = value else {
            return Err(LoggerError::config("Root must be a table"));
        };

        validate_logger_section(&values)?;
        Ok(Config { values })
    }

    fn lookup(&self, key: &str) -> Option<&toml::Value> {
        if let Some(value) = self.values.get(key) {
            return Some(value);
        }

        let mut segments = key.split('.');
        let mut current = self.values.get(segments.next()?)?;
        for segment in segments {
            current = current.as_table()?.get(segment)?;
        }
        Some(current)
    }
}

/// Type-checks `[logger]` at load time. Values are read later through
/// [`LoggerSettings::from_source`], which also covers non-TOML sources.
fn validate_logger_section(values: &toml::Table) -> Result<()> {
    if let Some(section) = values.get("logger") {
        let _: LoggerSettings = section.clone().try_into()?;
    }
    Ok(())
}

impl FromStr for Config {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        let value: toml::Value = toml::from_str(s)?;
        Self::from_toml_value(value)
    }
}

impl ConfigSource for Config {
    fn value(&self, key: &str) -> Option<String> {
        match self.lookup(key)? {
            toml::Value::String(s) => Some(s.clone()),
            toml::Value::Table(_) | toml::Value::Array(_) => None,
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_table_resolves_dotted_key() {
        let config: Config = r#"
            [logger]
            path = "/var/log/iam/application.log"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.get_value("logger.path"), "/var/log/iam/application.log");
    }

    #[test]
    fn quoted_dotted_key_is_honoured() {
        let config: Config = r#""logger.path" = "/tmp/test.log""#.parse().unwrap();
        assert_eq!(config.get_value("logger.path"), "/tmp/test.log");
    }

    #[test]
    fn missing_key_reads_as_empty() {
        let config = Config::default();
        assert_eq!(config.get_value("logger.path"), "");
        assert_eq!(config.logger_settings().unwrap(), LoggerSettings::default());
    }

    #[test]
    fn empty_path_is_treated_as_unset() {
        let config: Config = "[logger]\npath = \"\"".parse().unwrap();
        assert_eq!(config.logger_settings().unwrap().path, None);
    }

    #[test]
    fn legacy_flag_selects_legacy_style() {
        let config: Config = "[logger]\nlegacy_paths = true".parse().unwrap();
        let settings = config.logger_settings().unwrap();
        assert!(settings.legacy_paths);
        assert_eq!(settings.style(), PathStyle::Legacy);
    }

    #[test]
    fn well_formed_logger_section_validates() {
        let table: toml::Table =
            toml::from_str("[logger]\npath = \"/tmp/a.log\"\nlegacy_paths = false").unwrap();
        assert!(validate_logger_section(&table).is_ok());
        assert!(validate_logger_section(&toml::Table::new()).is_ok());
    }

    #[test]
    fn malformed_logger_section_is_rejected() {
        let err = "[logger]\npath = 5".parse::<Config>().unwrap_err();
        assert!(matches!(err, LoggerError::Config(_)));

        let err = "[logger]\nlegacy_paths = \"sometimes\""
            .parse::<Config>()
            .unwrap_err();
        assert!(matches!(err, LoggerError::Config(_)));
    }
}
