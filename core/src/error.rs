use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported platform '{0}': no default log location")]
    UnsupportedPlatform(String),

    #[error("Home directory could not be determined")]
    NoHomeDir,

    #[error("A global logger is already installed")]
    AlreadyInstalled,
}

pub type Result<T> = std::result::Result<T, LoggerError>;

impl LoggerError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LoggerError::Config(msg.into())
    }
}

impl From<toml::de::Error> for LoggerError {
    fn from(err: toml::de::Error) -> Self {
        LoggerError::Config(err.to_string())
    }
}

impl From<log::SetLoggerError> for LoggerError {
    fn from(_: log::SetLoggerError) -> Self {
        LoggerError::AlreadyInstalled
    }
}
