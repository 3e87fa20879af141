//! Generate ReasonML type definitions for CSS modules.
//!
//! Given the compiled output of a CSS-module loader, recss extracts the
//! exported class names, drops the ones that cannot be ReasonML record
//! fields, and writes a `<Name>Styles.re` file describing the rest:
//!
//! ```rust
//! use recss::keywords::KeywordSet;
//! use recss::pipeline::plan_stub;
//! use std::path::Path;
//!
//! let processed = r#"exports.locals = { "header": "_a", "is-open": "_b", "open": "_c" };"#;
//! let plan = plan_stub(processed, Path::new("/app/Nav.module.css"), Some("current"), KeywordSet::reason())
//!     .unwrap();
//!
//! assert_eq!(plan.stub, "type definition = Js.t({.\n    header: string,\n})");
//! assert_eq!(plan.destination.full_path(), Path::new("/app/NavStyles.re"));
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod destination;
pub mod errors;
pub mod extract;
pub mod io;
pub mod keywords;
pub mod logger;
pub mod names;
pub mod pipeline;
pub mod processor;
pub mod stub;
pub mod testkit;

// Re-export commonly used types
pub use crate::config::RecssConfig;
pub use crate::destination::{resolve_output_destination, DestinationPath};
pub use crate::errors::StubError;
pub use crate::extract::extract_locals;
pub use crate::io::{write_if_changed, FileSystem, RealFileSystem, WriteOutcome};
pub use crate::keywords::KeywordSet;
pub use crate::logger::{AdvisoryLogger, AdvisorySink};
pub use crate::names::{filter_valid_identifiers, partition_by_keyword, ValidationResult};
pub use crate::pipeline::{plan_stub, PipelineOutcome, PipelineOutput, StubPipeline};
pub use crate::processor::{PrecompiledProcessor, ProcessorError, ProcessorOptions, StyleProcessor};
pub use crate::stub::render_stub;
