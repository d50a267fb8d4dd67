// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::config::Config;
use crate::error::{EditorError, Result};
use crate::tabs::MAX_TABS;

/// Modal terminal editor with up to five tabs
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tabvi", version)]
pub struct Args {
    /// Files to open, one tab each
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Append log records to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Fixed viewport height instead of the terminal height
    #[arg(long, value_name = "N")]
    pub lines: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

pub const USAGE: &str = "Usage: tabvi [OPTIONS] <FILE>...";

impl Args {
    /// Checks the file count, then that every path exists.
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(EditorError::Argument(USAGE.to_string()));
        }
        if self.files.len() > MAX_TABS {
            return Err(EditorError::Argument(format!(
                "At most {} files can be opened at once (got {})",
                MAX_TABS,
                self.files.len()
            )));
        }
        if let Some(missing) = self.files.iter().find(|path| !path.exists()) {
            return Err(EditorError::NotFound { path: missing.clone() });
        }
        Ok(())
    }

    pub fn config(&self) -> Config {
        Config { lines_displayed: self.lines, ..Config::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tabvi").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_files_prints_usage() {
        let err = parse(&[]).validate().unwrap_err();
        assert_eq!(err.to_string(), USAGE);
    }

    #[test]
    fn more_than_five_files_is_rejected() {
        let err = parse(&["a", "b", "c", "d", "e", "f"]).validate().unwrap_err();
        assert!(matches!(err, EditorError::Argument(_)));
        assert!(err.to_string().starts_with("At most 5 files"));
    }

    #[test]
    fn missing_file_is_named() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("here.txt");
        std::fs::write(&present, "x").unwrap();
        let missing = dir.path().join("gone.txt");

        let args = parse(&[present.to_str().unwrap(), missing.to_str().unwrap()]);
        match args.validate() {
            Err(EditorError::NotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn options_are_parsed() {
        let args = parse(&["--log-file", "t.log", "--log-level", "debug", "--lines", "12", "a.txt"]);
        assert_eq!(args.files, vec![PathBuf::from("a.txt")]);
        assert_eq!(args.log_file, Some(PathBuf::from("t.log")));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
        assert_eq!(args.config().lines_displayed, Some(12));
    }
}
