//! The global logger can be set once per process, so this file holds a single test.

use std::fs;
use std::sync::Arc;

use iam_logger_core::{FacadeLogger, FileSink, LoggerError};
use log::LevelFilter;

#[test]
fn installed_bridge_routes_log_macros_into_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("application.log");
    let sink = Arc::new(FileSink::open(&path).unwrap());

    FacadeLogger::install(sink.clone(), LevelFilter::Info).unwrap();
    assert_eq!(log::max_level(), LevelFilter::Info);

    log::warn!(target: "iam::sessions", "session {} expired", 7);
    log::debug!(target: "iam::sessions", "below the max level");
    log::error!(target: "iam::auth", "bad credentials");
    log::logger().flush();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" - WARNING - iam::sessions: session 7 expired"));
    assert!(lines[1].ends_with(" - ERROR - iam::auth: bad credentials"));

    match FacadeLogger::install(sink, LevelFilter::Info) {
        Err(LoggerError::AlreadyInstalled) => {}
        other => panic!("expected AlreadyInstalled, got {other:?}"),
    }
}
