// src/error.rs
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while starting up or while loading files and directories.
#[derive(Error, Debug)]
pub enum EditorError {
    /// Wrong number of file arguments.
    #[error("{0}")]
    Argument(String),

    /// A path named on the command line does not exist.
    #[error("The file with the name {} does not exist", path.display())]
    NotFound { path: PathBuf },

    /// A file or directory could not be opened or read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EditorError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        EditorError::Io { path: path.to_path_buf(), source }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_path() {
        let err = EditorError::NotFound { path: PathBuf::from("missing.txt") };
        assert_eq!(err.to_string(), "The file with the name missing.txt does not exist");
    }

    #[test]
    fn io_error_keeps_its_source() {
        let err = EditorError::io(Path::new("dir"), io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(err.to_string().starts_with("could not read dir"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
