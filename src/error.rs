//! Error types for settings persistence.
//!
//! Every failure here is non-fatal: callers log it and fall back to
//! defaults (reads) or leave the file as-is (writes).

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Storage access failed.
#[derive(Debug)]
pub enum StorageError {
    /// The file could not be opened (missing, permissions, ...).
    Open { path: PathBuf, source: io::Error },
    /// The file opened but reading its contents failed.
    Read { path: PathBuf, source: io::Error },
    /// Creating, truncating or writing the file failed.
    Write { path: PathBuf, source: io::Error },
}

impl StorageError {
    pub fn path(&self) -> &PathBuf {
        match self {
            StorageError::Open { path, .. }
            | StorageError::Read { path, .. }
            | StorageError::Write { path, .. } => path,
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Open { path, source } => {
                write!(f, "failed to open {}: {}", path.display(), source)
            }
            StorageError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            StorageError::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Open { source, .. }
            | StorageError::Read { source, .. }
            | StorageError::Write { source, .. } => Some(source),
        }
    }
}

/// Why reading a settings record stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordErrorKind {
    /// The record ended before this line.
    Missing,
    /// The line is not a decimal integer.
    Invalid(String),
}

/// A settings record line that could not be used (0-indexed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    pub line: usize,
    pub kind: RecordErrorKind,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RecordErrorKind::Missing => write!(f, "line {} is missing", self.line),
            RecordErrorKind::Invalid(text) => {
                write!(f, "line {} is not an integer: {:?}", self.line, text)
            }
        }
    }
}

impl std::error::Error for RecordError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_message_names_path() {
        let err = StorageError::Open {
            path: PathBuf::from("apps_data/lifecounter/lifecounter.cfg"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("lifecounter.cfg"));
        assert!(msg.starts_with("failed to open"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn record_error_messages() {
        let missing = RecordError {
            line: 2,
            kind: RecordErrorKind::Missing,
        };
        assert_eq!(missing.to_string(), "line 2 is missing");

        let invalid = RecordError {
            line: 0,
            kind: RecordErrorKind::Invalid("abc".to_string()),
        };
        assert_eq!(invalid.to_string(), "line 0 is not an integer: \"abc\"");
    }
}
