//! Command-line shell over the IAM file logger.

mod cli;
mod paths;

use std::process::ExitCode;

use clap::Parser;
use iam_logger_core::{Config, FileLogger, Level, Result, resolve_log_path};
use log::{error, info};

use crate::cli::{Cli, Commands};
use crate::paths::CliPaths;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("iam-log failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = CliPaths::new(cli.config);
    let config = Config::load_with(&paths)?;

    match cli.cmd {
        Commands::Path => {
            println!("{}", resolve_log_path(&config, &paths)?.display());
        }
        Commands::Write {
            level,
            component,
            message,
        } => {
            let level = Level::from(level);
            let service = FileLogger::try_init(&config, &paths)?;
            service.logger(component).log(level, &message.join(" "));
            info!("appended {} line to {:?}", level, service.path());
            service.close();
        }
    }
    Ok(())
}
