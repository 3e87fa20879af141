//! I/O trait definitions for stub emission.
//!
//! Extraction, filtering and rendering are pure; the only effect in the
//! pipeline is persisting the rendered stub. That effect goes through
//! [`FileSystem`] so the pipeline can run against the real disk or against
//! an in-memory store in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use recss::io::traits::FileSystem;
//!
//! fn stub_exists<F: FileSystem>(fs: &F, path: &Path) -> bool {
//!     fs.exists(path)
//! }
//! ```

use crate::errors::StubError;
use std::path::Path;

/// File system operations needed to emit stubs.
///
/// Implementations should be thread-safe (`Send + Sync`) so stylesheets can
/// be processed in parallel against one shared file system.
pub trait FileSystem: Send + Sync {
    /// Read a file's contents as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `StubError::IoError` if the file doesn't exist or permission
    /// is denied.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StubError>;

    /// Write content to a file, creating it if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StubError::IoError` if:
    /// - Permission is denied
    /// - Parent directory doesn't exist
    /// - Disk is full
    fn write(&self, path: &Path, content: &str) -> Result<(), StubError>;

    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<(), StubError>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StubError> {
        (**self).read_bytes(path)
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), StubError> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), StubError> {
        (**self).create_dir_all(path)
    }
}
