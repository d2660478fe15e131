//! Errors raised while browsing sample and preset folders.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A directory could not be listed.
///
/// Carries the offending path next to the I/O error so a browser widget can
/// tell the user which folder failed.
#[derive(Debug)]
pub struct FileError {
    kind: FileErrorKind,
    path: PathBuf,
    source: io::Error,
}

/// Coarse classification of a [`FileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    /// The folder does not exist (or vanished while listing).
    NotFound,
    PermissionDenied,
    /// The path names a regular file.
    NotDirectory,
    /// The entry could not be decoded.
    InvalidData,
    Other,
}

impl FileErrorKind {
    fn classify(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::NotADirectory => Self::NotDirectory,
            io::ErrorKind::InvalidData => Self::InvalidData,
            _ => Self::Other,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::NotFound => "no such folder",
            Self::PermissionDenied => "access denied",
            Self::NotDirectory => "not a folder",
            Self::InvalidData => "unreadable entry",
            Self::Other => "cannot list folder",
        }
    }
}

impl FileError {
    /// Wrap an I/O failure that happened while accessing `path`.
    pub fn from_io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: FileErrorKind::classify(err.kind()),
            path: path.into(),
            source: err,
        }
    }

    /// What went wrong, independent of the platform error code.
    pub fn kind(&self) -> FileErrorKind {
        self.kind
    }

    /// The folder (or entry) being read when the failure happened.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The I/O error reported by the operating system.
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }

    /// Shorthand for `kind() == FileErrorKind::NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, FileErrorKind::NotFound)
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.kind)
    }
}

impl fmt::Display for FileErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

pub type FileResult<T> = Result<T, FileError>;
