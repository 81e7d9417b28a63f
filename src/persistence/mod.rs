//! File storage seam
//!
//! The host owns the storage driver; the app only needs whole-file reads
//! and create-or-truncate writes. `FsStorage` backs this with `std::fs`,
//! `MemoryStorage` keeps files in memory for tests and headless hosts.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::StorageError;

/// Persistent file storage provided by the host
pub trait Storage {
    /// Open `path` read-only and return its full contents. Bytes that are
    /// not valid UTF-8 come back as U+FFFD.
    fn read_to_string(&mut self, path: &Path) -> Result<String, StorageError>;

    /// Create or truncate `path` and write `contents`.
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), StorageError>;
}

/// Storage on the local filesystem, rooted at a base directory
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Storage for FsStorage {
    fn read_to_string(&mut self, path: &Path) -> Result<String, StorageError> {
        let full = self.resolve(path);
        let mut file = fs::File::open(&full).map_err(|source| StorageError::Open {
            path: full.clone(),
            source,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| StorageError::Read { path: full, source })?;
        // Undecodable bytes stay local to their line
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), StorageError> {
        let full = self.resolve(path);
        if let Some(dir) = full.parent() {
            fs::create_dir_all(dir).map_err(|source| StorageError::Open {
                path: full.clone(),
                source,
            })?;
        }
        let mut file = fs::File::create(&full).map_err(|source| StorageError::Open {
            path: full.clone(),
            source,
        })?;
        file.write_all(contents.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|source| StorageError::Write { path: full, source })
    }
}

/// In-memory storage. Clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Rc<RefCell<HashMap<PathBuf, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file's contents
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    /// Current contents of a file, if present
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Make every subsequent write fail
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl Storage for MemoryStorage {
    fn read_to_string(&mut self, path: &Path) -> Result<String, StorageError> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::Open {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            })
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), StorageError> {
        if self.read_only.get() {
            return Err(StorageError::Write {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only storage"),
            });
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
