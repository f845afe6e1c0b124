//! The single append-only file shared by every logger handle.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use log::debug;

use crate::error::Result;

/// Append-mode log file. A disabled sink (no file) silently drops writes.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Creates missing parent directories and the file itself. Existing files are left alone.
    pub fn prepare(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)?;
        debug!("Created log file {:?}", path);
        Ok(())
    }

    /// Prepares `path` and opens it for appending; existing content is never truncated.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        Self::prepare(&path)?;
        let file = OpenOptions::new().append(true).open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    pub fn disabled(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().is_some()
    }

    /// Writes one line and flushes. Best-effort: I/O errors are dropped.
    pub fn write_line(&self, line: &str) {
        if let Some(file) = self.lock().as_mut() {
            let _ = writeln!(file, "{line}");
            let _ = file.flush();
        }
    }

    /// Writes a tagged line followed by a free-form block, with no other writer in between.
    pub fn write_block(&self, line: &str, block: &str) {
        if let Some(file) = self.lock().as_mut() {
            let _ = writeln!(file, "{line}");
            let _ = writeln!(file, "{block}");
            let _ = file.flush();
        }
    }

    pub fn flush(&self) {
        if let Some(file) = self.lock().as_mut() {
            let _ = file.flush();
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        // A panic mid-write leaves the handle usable
        self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("application.log");

        let sink = FileSink::open(&path).unwrap();
        assert!(sink.is_enabled());
        assert!(path.parent().unwrap().is_dir());
        assert!(path.is_file());
    }

    #[test]
    fn writes_are_flushed_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("application.log");

        let sink = FileSink::open(&path).unwrap();
        sink.write_line("first");
        sink.write_block("second", "block line 1\nblock line 2");

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "first\nsecond\nblock line 1\nblock line 2\n"
        );
    }

    #[test]
    fn disabled_sink_drops_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.log");

        let sink = FileSink::disabled(&path);
        sink.write_line("ignored");
        sink.flush();

        assert!(!sink.is_enabled());
        assert!(!path.exists());
    }

    #[test]
    fn open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        assert!(FileSink::open(blocker.join("application.log")).is_err());
    }
}
