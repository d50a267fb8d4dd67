// src/logging.rs
//! The terminal is owned by the UI while the editor runs, so log records go
//! to an optional file instead of stderr.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

use crate::error::{EditorError, Result};

pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    pub fn new(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| EditorError::io(path, e))?;
        Ok(FileLogger { level, file: Mutex::new(file) })
    }

    fn format(record: &Record) -> String {
        format!("{}: {}: {}", record.level(), record.target(), record.args())
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Installs the file logger when `path` is given; otherwise logging is off.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<()> {
    let Some(path) = path else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };
    let logger = FileLogger::new(path, level)?;
    // a logger may already be installed (tests); keep the first one
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn writes_records_at_or_above_the_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabvi.log");
        let logger = FileLogger::new(&path, LevelFilter::Info).unwrap();

        logger.log(
            &Record::builder()
                .args(format_args!("opened notes.txt"))
                .level(Level::Info)
                .target("tabvi::editor")
                .build(),
        );
        logger.log(&Record::builder().args(format_args!("noise")).level(Level::Debug).build());
        logger.flush();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "INFO: tabvi::editor: opened notes.txt\n");
    }

    #[test]
    fn unwritable_log_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileLogger::new(&dir.path().join("missing").join("x.log"), LevelFilter::Info).err();
        assert!(matches!(err, Some(EditorError::Io { .. })));
    }
}
