//! In-memory file system for tests.
//!
//! State lives behind `Arc<RwLock<_>>` so clones share one store and the
//! type is `Send + Sync`, which the parallel batch driver requires.

use crate::errors::StubError;
use crate::io::traits::FileSystem;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
    dirs: Arc<RwLock<HashSet<PathBuf>>>,
    writes: Arc<AtomicUsize>,
    read_only: bool,
}

impl MemoryFileSystem {
    /// Create an empty file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its parent directories) without counting a write.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.insert_dir(parent);
        }
        self.files
            .write()
            .expect("Lock poisoned")
            .insert(path, content.into().into_bytes());
        self
    }

    /// Make every write and directory creation fail.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Number of physical file writes performed through the trait.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current content of `path` as UTF-8, if the file exists.
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .read()
            .expect("Lock poisoned")
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs
            .read()
            .expect("Lock poisoned")
            .contains(path.as_ref())
    }

    /// All file paths, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self
            .files
            .read()
            .expect("Lock poisoned")
            .keys()
            .cloned()
            .collect();
        paths.sort();
        paths
    }

    fn insert_dir(&self, path: &Path) {
        let mut dirs = self.dirs.write().expect("Lock poisoned");
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StubError> {
        self.files
            .read()
            .expect("Lock poisoned")
            .get(path)
            .cloned()
            .ok_or_else(|| StubError::io_with_path("File not found", path))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), StubError> {
        if self.read_only {
            return Err(StubError::io_with_path("Read-only file system", path));
        }
        let parent_missing = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .is_some_and(|p| !self.has_dir(p));
        if parent_missing {
            return Err(StubError::io_with_path("Parent directory does not exist", path));
        }

        self.files
            .write()
            .expect("Lock poisoned")
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.has_dir(path) || self.files.read().expect("Lock poisoned").contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), StubError> {
        if self.read_only {
            return Err(StubError::io_with_path("Read-only file system", path));
        }
        self.insert_dir(path);
        Ok(())
    }
}
