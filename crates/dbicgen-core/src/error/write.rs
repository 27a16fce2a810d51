use super::Error;
use std::path::{Path, PathBuf};

/// Error when a generated file cannot be persisted.
///
/// The io error's message is part of the display text.
#[derive(Debug)]
pub(super) struct WriteError {
    path: PathBuf,
    source: std::io::Error,
}

impl std::error::Error for WriteError {}

impl core::fmt::Display for WriteError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to write `{}`: {}", self.path.display(), self.source)
    }
}

impl Error {
    /// Creates a write error for the file (or directory) at `path`.
    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Error {
        Error::from(super::ErrorKind::Write(WriteError {
            path: path.as_ref().to_path_buf(),
            source,
        }))
    }

    /// Returns `true` if this error is a write error.
    pub fn is_write(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::Write(_))
    }
}
