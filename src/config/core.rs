use crate::destination::DEFAULT_DEST_DIR;
use crate::processor::ProcessorOptions;
use serde::{Deserialize, Serialize};

/// Keys the processor options own; they are never taken from the pass-through table.
const RESERVED_PROCESSOR_KEYS: [&str; 2] = ["modules", "silent"];

/// Root configuration structure for recss (`.recss.toml`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RecssConfig {
    /// Output directory: `"current"`, a path, or unset for `./src/styles`
    #[serde(default)]
    pub dest_dir: Option<String>,

    /// Suppress advisory warnings about dropped class names
    #[serde(default)]
    pub silent: bool,

    /// Options forwarded verbatim to the style processor
    #[serde(default)]
    pub processor: toml::Table,

    /// Batch discovery settings
    #[serde(default)]
    pub batch: Option<BatchConfig>,

    /// Top-level keys recss does not recognise
    #[serde(flatten)]
    pub unknown: toml::Table,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchConfig {
    /// Glob matched against file names of processed outputs
    #[serde(default = "default_batch_pattern")]
    pub pattern: String,

    /// Globs matched against full paths; matching outputs are skipped
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            pattern: default_batch_pattern(),
            ignore: Vec::new(),
        }
    }
}

pub fn default_batch_pattern() -> String {
    "*.css.js".to_string()
}

impl RecssConfig {
    /// Apply command-line overrides. A `true` silent flag always wins.
    pub fn with_overrides(mut self, dest_dir: Option<String>, silent: bool) -> Self {
        if dest_dir.is_some() {
            self.dest_dir = dest_dir;
        }
        self.silent |= silent;
        self
    }

    pub fn dest_dir(&self) -> Option<&str> {
        self.dest_dir.as_deref()
    }

    /// Human-readable destination, for status output.
    pub fn dest_dir_display(&self) -> &str {
        match self.dest_dir() {
            Some(dir) if !dir.is_empty() => dir,
            _ => DEFAULT_DEST_DIR,
        }
    }

    /// Names of unrecognised top-level keys, sorted.
    pub fn unknown_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.unknown.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn batch_pattern(&self) -> String {
        self.batch
            .as_ref()
            .map(|b| b.pattern.clone())
            .unwrap_or_else(default_batch_pattern)
    }

    pub fn batch_ignore(&self) -> Vec<String> {
        self.batch
            .as_ref()
            .map(|b| b.ignore.clone())
            .unwrap_or_default()
    }

    /// Options handed to the processor: pass-through table plus forced `modules`.
    pub fn processor_options(&self) -> ProcessorOptions {
        let mut passthrough = self.processor.clone();
        for key in RESERVED_PROCESSOR_KEYS {
            passthrough.remove(key);
        }
        ProcessorOptions {
            modules: true,
            silent: self.silent,
            passthrough,
        }
    }
}
