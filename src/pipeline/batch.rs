//! Parallel pipeline runs over many stylesheets.
//!
//! Each stylesheet is independent, so files are spread across the rayon
//! pool. Stylesheets that resolve to the same stub file are not serialized
//! against each other.

use super::{PipelineOutcome, StubPipeline};
use crate::errors::StubError;
use crate::io::{FileSystem, WriteOutcome};
use crate::processor::StyleProcessor;
use rayon::prelude::*;
use std::path::PathBuf;

/// Per-file results of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<(PathBuf, Result<PipelineOutcome, StubError>)>,
}

/// Counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub pass_through: usize,
    pub keyword_collisions: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn summary(&self) -> BatchSummary {
        self.results
            .iter()
            .fold(BatchSummary::default(), |mut summary, (_, result)| {
                match result {
                    Ok(PipelineOutcome::PassThrough) => summary.pass_through += 1,
                    Ok(PipelineOutcome::Written {
                        write,
                        keyword_names,
                        ..
                    }) => {
                        match write {
                            WriteOutcome::Created => summary.created += 1,
                            WriteOutcome::Updated => summary.updated += 1,
                            WriteOutcome::Unchanged => summary.unchanged += 1,
                        }
                        summary.keyword_collisions += keyword_names.len();
                    }
                    Err(_) => summary.failed += 1,
                }
                summary
            })
    }

    pub fn errors(&self) -> Vec<StubError> {
        self.results
            .iter()
            .filter_map(|(_, result)| result.as_ref().err().cloned())
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|(_, result)| result.is_err())
    }
}

/// Run the pipeline for every resource, in parallel.
///
/// Failures do not stop the batch; they are collected in the report.
pub fn run_batch<P, F>(pipeline: &StubPipeline<P, F>, resources: &[PathBuf]) -> BatchReport
where
    P: StyleProcessor,
    F: FileSystem,
{
    let results = resources
        .par_iter()
        .map(|resource| {
            let result = pipeline.run(resource).map(|output| output.outcome);
            if let Err(e) = &result {
                log::warn!("{}: {}", resource.display(), e);
            }
            (resource.clone(), result)
        })
        .collect();

    BatchReport { results }
}
