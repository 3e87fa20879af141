//! Testing infrastructure for recss.
//!
//! - **[`MemoryFileSystem`]**: in-memory [`FileSystem`](crate::io::FileSystem)
//!   that counts physical writes, used to check write idempotence without
//!   touching disk
//! - **[`RecordingLogger`]**: captures advisory messages for assertions
//!
//! # Quick Start
//!
//! ```rust
//! use recss::io::write_if_changed;
//! use recss::testkit::MemoryFileSystem;
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new();
//! write_if_changed(&fs, Path::new("/out"), "AppStyles.re", "x").unwrap();
//! write_if_changed(&fs, Path::new("/out"), "AppStyles.re", "x").unwrap();
//! assert_eq!(fs.write_count(), 1);
//! ```

pub mod memory_fs;
pub mod recording_logger;

pub use memory_fs::MemoryFileSystem;
pub use recording_logger::RecordingLogger;
