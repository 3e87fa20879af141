//! Production implementation of [`FileSystem`].
//!
//! ```rust,ignore
//! use recss::io::real::RealFileSystem;
//! use recss::io::traits::FileSystem;
//!
//! let fs = RealFileSystem::new();
//! fs.create_dir_all(Path::new("src/styles"))?;
//! ```

use crate::errors::StubError;
use crate::io::traits::FileSystem;
use std::fs;
use std::path::Path;

/// File system backed by `std::fs`.
///
/// Stateless, so it can be shared across worker threads freely.
#[derive(Debug, Default, Clone)]
pub struct RealFileSystem;

impl RealFileSystem {
    /// Create a new real file system instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StubError> {
        fs::read(path)
            .map_err(|e| StubError::io_with_path(format!("Failed to read file: {}", e), path))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), StubError> {
        fs::write(path, content)
            .map_err(|e| StubError::io_with_path(format!("Failed to write file: {}", e), path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), StubError> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(path).map_err(|e| {
            StubError::io_with_path(format!("Failed to create directory: {}", e), path)
        })
    }
}
