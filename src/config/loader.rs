use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::RecssConfig;
use crate::errors::StubError;

/// Name of the configuration file searched for in ancestor directories.
pub const CONFIG_FILE_NAME: &str = ".recss.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<RecssConfig, StubError> {
    toml::from_str::<RecssConfig>(contents)
        .map_err(|e| StubError::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Load a config file from an explicit path. Any failure is an error.
pub fn load_config_file(path: &Path) -> Result<RecssConfig, StubError> {
    let contents = read_config_file(path).map_err(|e| {
        StubError::config_with_path(format!("Failed to read config: {}", e), path)
    })?;
    let config = toml::from_str::<RecssConfig>(&contents).map_err(|e| {
        StubError::config_with_path(format!("Failed to parse config: {}", e), path)
    })?;
    warn_unknown_keys(&config, path);
    Ok(config)
}

/// Warn about top-level keys that would otherwise be ignored silently.
pub(crate) fn warn_unknown_keys(config: &RecssConfig, config_path: &Path) {
    let unknown = config.unknown_keys();
    if !unknown.is_empty() {
        log::warn!(
            "Ignoring unknown keys in {}: {}. Processor options belong under [processor].",
            config_path.display(),
            unknown.join(", ")
        );
    }
}

/// Try loading config from a specific path, warning on anything but absence
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RecssConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            warn_unknown_keys(&config, config_path);
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load the nearest config file above `start`, or defaults.
///
/// The first existing file wins even when it cannot be used; ancestors
/// further up are never consulted in that case.
pub fn load_config_from(start: PathBuf) -> RecssConfig {
    let Some(config_path) = directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
    else {
        log::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        return RecssConfig::default();
    };

    try_load_config_from_path(&config_path).unwrap_or_default()
}

pub fn load_config() -> RecssConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RecssConfig::default()
        }
    }
}
