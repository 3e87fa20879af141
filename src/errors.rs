//! Error types for stub generation.
//!
//! The pipeline distinguishes two failure sources: the upstream style
//! processor (propagated unchanged) and the filesystem (directory creation,
//! reads and writes of the generated stub). Missing exports and dropped
//! class names are not errors and never surface here.
//!
//! # Example
//!
//! ```rust
//! use recss::errors::StubError;
//!
//! let err = StubError::io_with_path("Failed to write file", "src/styles/AppStyles.re");
//! assert_eq!(err.category(), "I/O");
//! assert!(err.to_string().contains("AppStyles.re"));
//! ```

use crate::processor::ProcessorError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Unified error type for recss operations.
///
/// # Categories
///
/// - `Upstream`: the style processor reported a failure
/// - `IoError`: directory creation, stub read or stub write failed
/// - `ConfigError`: a configuration file could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubError {
    /// The upstream processor failed; no stub was generated.
    Upstream(ProcessorError),
    /// File system I/O errors (read, write, permissions, etc.)
    IoError {
        message: String,
        path: Option<PathBuf>,
    },
    /// Configuration file errors
    ConfigError {
        message: String,
        path: Option<PathBuf>,
    },
}

impl StubError {
    /// Wrap an upstream processor failure.
    pub fn upstream(error: ProcessorError) -> Self {
        Self::Upstream(error)
    }

    /// Create an I/O error with a message.
    pub fn io(message: impl Into<String>) -> Self {
        Self::IoError {
            message: message.into(),
            path: None,
        }
    }

    /// Create an I/O error with a message and path context.
    pub fn io_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::IoError {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path context.
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::ConfigError {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Get the associated path, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::IoError { path, .. } | Self::ConfigError { path, .. } => path.as_ref(),
            Self::Upstream(_) => None,
        }
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Upstream(_) => "Upstream",
            Self::IoError { .. } => "I/O",
            Self::ConfigError { .. } => "Config",
        }
    }

    /// True when the failure came from the style processor rather than from us.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

impl fmt::Display for StubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream(inner) => write!(f, "Upstream error: {}", inner),
            Self::IoError { message, path } => {
                write!(f, "I/O error: {}", message)?;
                if let Some(p) = path {
                    write!(f, " (path: {})", p.display())?;
                }
                Ok(())
            }
            Self::ConfigError { message, path } => {
                write!(f, "Config error: {}", message)?;
                if let Some(p) = path {
                    write!(f, " (file: {})", p.display())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for StubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Upstream(inner) => Some(inner),
            Self::IoError { .. } | Self::ConfigError { .. } => None,
        }
    }
}

impl From<ProcessorError> for StubError {
    fn from(err: ProcessorError) -> Self {
        Self::Upstream(err)
    }
}

impl From<io::Error> for StubError {
    fn from(err: io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Format a list of errors for display.
///
/// ```rust
/// use recss::errors::{format_error_list, StubError};
///
/// let errors = vec![StubError::io("disk full"), StubError::config("bad key")];
/// let formatted = format_error_list(&errors);
/// assert!(formatted.contains("1. I/O error"));
/// assert!(formatted.contains("2. Config error: bad key"));
/// ```
pub fn format_error_list(errors: &[StubError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}
