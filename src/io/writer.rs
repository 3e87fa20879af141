//! Idempotent stub persistence.
//!
//! Bundlers watch the generated `.re` files. Rewriting a file with the same
//! bytes still bumps its mtime and triggers a rebuild, so a write only
//! happens when the content actually changed.
//!
//! The read-compare-write sequence is not atomic. Two invocations that
//! target the same file concurrently race and the last writer wins.

use crate::errors::StubError;
use crate::io::traits::FileSystem;
use std::fmt;
use std::path::Path;

/// What [`write_if_changed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteOutcome {
    /// The file did not exist and was written.
    Created,
    /// The file existed with different content and was overwritten.
    Updated,
    /// The file already held exactly this content; nothing was written.
    Unchanged,
}

impl WriteOutcome {
    pub fn wrote(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        };
        f.write_str(label)
    }
}

/// Write `content` to `directory/filename` unless it is already there.
///
/// The directory is created first if needed.
pub fn write_if_changed<F: FileSystem>(
    fs: &F,
    directory: &Path,
    filename: &str,
    content: &str,
) -> Result<WriteOutcome, StubError> {
    fs.create_dir_all(directory)?;

    let path = directory.join(filename);
    if !fs.exists(&path) {
        fs.write(&path, content)?;
        log::info!("Created {}", path.display());
        return Ok(WriteOutcome::Created);
    }

    if fs.read_bytes(&path)? == content.as_bytes() {
        log::debug!("{} is up to date", path.display());
        return Ok(WriteOutcome::Unchanged);
    }

    fs.write(&path, content)?;
    log::info!("Updated {}", path.display());
    Ok(WriteOutcome::Updated)
}
