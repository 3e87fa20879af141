//! Boundary with the upstream CSS-module processor.
//!
//! The processor turns a stylesheet into its compiled module text, which is
//! expected to carry an `exports.locals = { ... };` block. recss never
//! compiles CSS itself: it asks a [`StyleProcessor`] for that text and works
//! on the result.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure reported by a style processor.
///
/// These are returned to the caller unchanged and abort stub generation
/// for the current stylesheet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessorError {
    #[error("style processing failed: {0}")]
    Failed(String),

    #[error("failed to read processed output {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },
}

impl ProcessorError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Options forwarded to the processor.
///
/// `modules` is always on: class-name extraction only makes sense for
/// CSS-module output. Everything in `passthrough` is handed over verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorOptions {
    pub modules: bool,
    pub silent: bool,
    #[serde(flatten)]
    pub passthrough: toml::Table,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            modules: true,
            silent: false,
            passthrough: toml::Table::new(),
        }
    }
}

/// Something that produces compiled CSS-module text for a stylesheet.
///
/// Implementations must be shareable across threads; the batch driver calls
/// one processor from several workers at once.
pub trait StyleProcessor: Send + Sync {
    fn process(&self, resource: &Path, options: &ProcessorOptions)
        -> Result<String, ProcessorError>;
}

impl<F> StyleProcessor for F
where
    F: Fn(&Path, &ProcessorOptions) -> Result<String, ProcessorError> + Send + Sync,
{
    fn process(
        &self,
        resource: &Path,
        options: &ProcessorOptions,
    ) -> Result<String, ProcessorError> {
        self(resource, options)
    }
}

#[derive(Debug, Clone)]
enum PrecompiledSource {
    File(PathBuf),
    Inline(String),
}

/// Processor adapter for output that was already produced by another tool.
///
/// Used by the CLI, where the bundler has already run the CSS loader and left
/// its output on disk or piped it to stdin.
#[derive(Debug, Clone)]
pub struct PrecompiledProcessor {
    source: PrecompiledSource,
}

impl PrecompiledProcessor {
    /// Read the processed text from `path` on every call.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: PrecompiledSource::File(path.into()),
        }
    }

    /// Serve a fixed, already loaded text.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            source: PrecompiledSource::Inline(content.into()),
        }
    }
}

impl StyleProcessor for PrecompiledProcessor {
    fn process(
        &self,
        _resource: &Path,
        _options: &ProcessorOptions,
    ) -> Result<String, ProcessorError> {
        match &self.source {
            PrecompiledSource::File(path) => {
                fs::read_to_string(path).map_err(|e| ProcessorError::Read {
                    path: path.clone(),
                    message: e.to_string(),
                })
            }
            PrecompiledSource::Inline(content) => Ok(content.clone()),
        }
    }
}

/// Processor that maps each resource to a sibling file holding its output.
///
/// `styles/App.css` is served from `styles/App.css<suffix>`, which matches
/// how the batch command discovers processed files.
#[derive(Debug, Clone)]
pub struct SiblingOutputProcessor {
    suffix: String,
}

impl SiblingOutputProcessor {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn output_path_for(&self, resource: &Path) -> PathBuf {
        let mut raw = resource.as_os_str().to_os_string();
        raw.push(&self.suffix);
        PathBuf::from(raw)
    }
}

impl StyleProcessor for SiblingOutputProcessor {
    fn process(
        &self,
        resource: &Path,
        options: &ProcessorOptions,
    ) -> Result<String, ProcessorError> {
        PrecompiledProcessor::from_file(self.output_path_for(resource)).process(resource, options)
    }
}
