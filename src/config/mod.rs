mod core;
mod loader;

pub use self::core::{default_batch_pattern, BatchConfig, RecssConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
