//! CLI command implementations for recss.
//!
//! - **generate**: emit the stub for one stylesheet from its processed output
//! - **batch**: discover processed outputs below a directory and emit all stubs
//! - **init**: write a default `.recss.toml`

pub mod batch;
pub mod generate;
pub mod init;

pub use batch::{handle_batch, BatchCommandConfig};
pub use generate::{handle_generate, GenerateConfig};
pub use init::init_config;

use crate::config::{load_config, load_config_file, RecssConfig};
use anyhow::Result;
use std::path::Path;

/// Use an explicit config file if given, else the nearest `.recss.toml`.
pub fn resolve_config(explicit: Option<&Path>) -> Result<RecssConfig> {
    match explicit {
        Some(path) => Ok(load_config_file(path)?),
        None => Ok(load_config()),
    }
}
