//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use iam_logger_core::Level;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iam-log", version, about = "Append to the IAM application log")]
pub struct Cli {
    /// Path to config TOML (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Severity written on the line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum LevelArg {
    Info,
    #[value(alias = "warn")]
    Warning,
    Error,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Info => Level::Info,
            LevelArg::Warning => Level::Warning,
            LevelArg::Error => Level::Error,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append one line to the log file
    Write {
        /// Severity of the line
        #[arg(short, long, value_enum, default_value_t = LevelArg::Info)]
        level: LevelArg,

        /// Component name recorded on the line
        #[arg(short, long, default_value = "iam-log")]
        component: String,

        /// Message text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Print the resolved log file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_joins_message_words() {
        let cli =
            Cli::try_parse_from(["iam-log", "write", "-l", "warning", "user", "locked"]).unwrap();
        match cli.cmd {
            Commands::Write {
                level,
                component,
                message,
            } => {
                assert_eq!(level, LevelArg::Warning);
                assert_eq!(component, "iam-log");
                assert_eq!(message.join(" "), "user locked");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn level_defaults_to_info_and_accepts_warn_alias() {
        let cli = Cli::try_parse_from(["iam-log", "write", "hello"]).unwrap();
        assert!(matches!(
            cli.cmd,
            Commands::Write {
                level: LevelArg::Info,
                ..
            }
        ));

        let cli = Cli::try_parse_from(["iam-log", "write", "--level", "warn", "hi"]).unwrap();
        assert!(matches!(
            cli.cmd,
            Commands::Write {
                level: LevelArg::Warning,
                ..
            }
        ));
        assert_eq!(Level::from(LevelArg::Error), Level::Error);
    }

    #[test]
    fn unknown_level_is_rejected_while_parsing() {
        let err = Cli::try_parse_from(["iam-log", "write", "--level", "debug", "hi"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn write_requires_a_message() {
        assert!(Cli::try_parse_from(["iam-log", "write"]).is_err());
    }
}
