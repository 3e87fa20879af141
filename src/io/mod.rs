pub mod real;
pub mod traits;
pub mod walker;
pub mod writer;

// Re-export I/O traits for convenient access
pub use real::RealFileSystem;
pub use traits::FileSystem;
pub use walker::{find_resources, resource_for_output, ProcessedOutputWalker};
pub use writer::{write_if_changed, WriteOutcome};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
