//! Stub generation pipeline.
//!
//! [`plan_stub`] is the pure part: processed text in, rendered stub and its
//! destination out. [`StubPipeline`] wraps it with the two effects: calling
//! the style processor and persisting the stub through a [`FileSystem`].
//!
//! Per stylesheet the order is fixed:
//!
//! 1. processor output (errors propagate unchanged)
//! 2. `exports.locals` extraction (absent block means pass-through)
//! 3. identifier-shape filter (silent)
//! 4. keyword partition (collisions reported through the advisory sink)
//! 5. render, resolve destination, write if changed

pub mod batch;

use crate::config::RecssConfig;
use crate::destination::{resolve_output_destination, DestinationPath};
use crate::errors::StubError;
use crate::extract::extract_locals;
use crate::io::{write_if_changed, FileSystem, WriteOutcome};
use crate::keywords::KeywordSet;
use crate::logger::{report_keyword_collisions, AdvisoryLogger, AdvisorySink};
use crate::names::{validate_names, ValidationResult};
use crate::processor::StyleProcessor;
use crate::stub::render_stub;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use batch::{run_batch, BatchReport, BatchSummary};

/// Everything needed to emit one stub, computed without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubPlan {
    /// Names found in the locals block, first-seen order
    pub extracted: Vec<String>,
    pub validation: ValidationResult,
    pub stub: String,
    pub destination: DestinationPath,
}

impl StubPlan {
    /// Names removed by the identifier-shape filter.
    pub fn dropped_invalid(&self) -> usize {
        self.extracted.len()
            - self.validation.valid_names.len()
            - self.validation.keyword_names.len()
    }
}

/// Compute the stub for processed text, or `None` if it exports no locals.
pub fn plan_stub(
    content: &str,
    resource: &Path,
    dest_dir: Option<&str>,
    keywords: &KeywordSet,
) -> Option<StubPlan> {
    let extracted = extract_locals(content)?;
    let validation = validate_names(&extracted, keywords);
    let stub = render_stub(&validation.valid_names);
    let destination = resolve_output_destination(resource, dest_dir);

    Some(StubPlan {
        extracted,
        validation,
        stub,
        destination,
    })
}

/// What happened to one stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// No locals block; nothing was written.
    PassThrough,
    Written {
        path: PathBuf,
        write: WriteOutcome,
        keyword_names: Vec<String>,
    },
}

/// Processed text, returned unchanged, plus what was done with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub content: String,
    pub outcome: PipelineOutcome,
}

/// Processor + filesystem + configuration, reusable across stylesheets.
///
/// `Send + Sync` whenever its processor and filesystem are, so one instance
/// can serve a parallel batch.
pub struct StubPipeline<P, F> {
    processor: P,
    fs: F,
    config: RecssConfig,
    keywords: KeywordSet,
    sink: Arc<dyn AdvisorySink>,
}

impl<P: StyleProcessor, F: FileSystem> StubPipeline<P, F> {
    pub fn new(processor: P, fs: F, config: RecssConfig) -> Self {
        let sink = Arc::new(AdvisoryLogger::new(config.silent));
        Self {
            processor,
            fs,
            config,
            keywords: KeywordSet::reason().clone(),
            sink,
        }
    }

    /// Replace the reserved-word table.
    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }

    /// Send advisory messages somewhere other than the log.
    ///
    /// The sink receives messages even when `silent` is set; silencing is a
    /// property of [`AdvisoryLogger`], not of the pipeline.
    pub fn with_sink(mut self, sink: impl AdvisorySink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Run the full pipeline for one stylesheet.
    pub fn run(&self, resource: &Path) -> Result<PipelineOutput, StubError> {
        let options = self.config.processor_options();
        let content = self
            .processor
            .process(resource, &options)
            .map_err(StubError::upstream)?;

        let Some(plan) = plan_stub(&content, resource, self.config.dest_dir(), &self.keywords)
        else {
            log::debug!(
                "{} exports no locals, passing through",
                resource.display()
            );
            return Ok(PipelineOutput {
                content,
                outcome: PipelineOutcome::PassThrough,
            });
        };

        log::debug!(
            "{}: {} names extracted, {} kept, {} keywords, {} invalid",
            resource.display(),
            plan.extracted.len(),
            plan.validation.valid_names.len(),
            plan.validation.keyword_names.len(),
            plan.dropped_invalid()
        );

        let file_name = resource
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        report_keyword_collisions(
            self.sink.as_ref(),
            &file_name,
            &plan.validation.keyword_names,
        );

        let write = write_if_changed(
            &self.fs,
            &plan.destination.directory,
            &plan.destination.filename,
            &plan.stub,
        )?;

        Ok(PipelineOutput {
            content,
            outcome: PipelineOutcome::Written {
                path: plan.destination.full_path(),
                write,
                keyword_names: plan.validation.keyword_names,
            },
        })
    }
}
