use super::resolve_config;
use crate::errors::format_error_list;
use crate::io::{find_resources, walker::PROCESSED_SUFFIX, RealFileSystem};
use crate::pipeline::{run_batch, BatchSummary, StubPipeline};
use crate::processor::SiblingOutputProcessor;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct BatchCommandConfig {
    pub root: PathBuf,
    pub pattern: Option<String>,
    pub ignore: Vec<String>,
    pub dest_dir: Option<String>,
    pub silent: bool,
    pub jobs: usize,
    pub config_path: Option<PathBuf>,
}

pub fn handle_batch(config: BatchCommandConfig) -> Result<()> {
    let summary = run_batch_command(config)?;
    println!("{}", format_summary(&summary));
    Ok(())
}

/// Discover processed outputs, generate all stubs, and fail if any file failed.
pub fn run_batch_command(config: BatchCommandConfig) -> Result<BatchSummary> {
    let settings = resolve_config(config.config_path.as_deref())?
        .with_overrides(config.dest_dir, config.silent);
    let pattern = config.pattern.unwrap_or_else(|| settings.batch_pattern());
    let mut ignore = settings.batch_ignore();
    ignore.extend(config.ignore);

    let resources = find_resources(&config.root, &pattern, &ignore)?;
    log::info!(
        "Found {} processed outputs below {}, writing stubs to {}",
        resources.len(),
        config.root.display(),
        settings.dest_dir_display()
    );

    let pipeline = StubPipeline::new(
        SiblingOutputProcessor::new(PROCESSED_SUFFIX),
        RealFileSystem::new(),
        settings,
    );

    let report = if config.jobs > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()
            .context("Failed to build worker pool")?;
        pool.install(|| run_batch(&pipeline, &resources))
    } else {
        run_batch(&pipeline, &resources)
    };

    if report.has_failures() {
        anyhow::bail!(
            "{} of {} stylesheets failed:\n{}",
            report.summary().failed,
            resources.len(),
            format_error_list(&report.errors())
        );
    }

    Ok(report.summary())
}

pub fn format_summary(summary: &BatchSummary) -> String {
    let total = summary.created
        + summary.updated
        + summary.unchanged
        + summary.pass_through
        + summary.failed;
    let mut line = format!(
        "Processed {} stylesheets: {} created, {} updated, {} unchanged, {} without exports",
        total,
        summary.created.to_string().green(),
        summary.updated.to_string().yellow(),
        summary.unchanged.to_string().dimmed(),
        summary.pass_through,
    );
    if summary.keyword_collisions > 0 {
        line.push_str(&format!(
            ", {} keyword collisions dropped",
            summary.keyword_collisions.to_string().yellow()
        ));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn batch_config(root: PathBuf) -> BatchCommandConfig {
        let config_path = root.join("recss.toml");
        fs::write(&config_path, "dest_dir = \"current\"\nsilent = true").unwrap();
        BatchCommandConfig {
            root,
            pattern: None,
            ignore: Vec::new(),
            dest_dir: None,
            silent: false,
            jobs: 2,
            config_path: Some(config_path),
        }
    }

    #[test]
    fn test_batch_generates_stubs_next_to_stylesheets() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("components");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("Button.module.css.js"),
            "exports.locals = {\n\t\"primary\": \"_p\"\n};",
        )
        .unwrap();
        fs::write(dir.join("Reset.css.js"), "exports.push([]);").unwrap();

        let summary = run_batch_command(batch_config(temp.path().to_path_buf())).unwrap();

        assert_eq!(summary.created, 1);
        assert_eq!(summary.pass_through, 1);
        assert_eq!(
            fs::read_to_string(dir.join("ButtonStyles.re")).unwrap(),
            "type definition = Js.t({.\n    primary: string,\n})"
        );

        let again = run_batch_command(batch_config(temp.path().to_path_buf())).unwrap();
        assert_eq!(again.unchanged, 1);
    }

    #[test]
    fn test_batch_respects_ignore() {
        let temp = TempDir::new().unwrap();
        let dist = temp.path().join("dist");
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join("A.css.js"), "exports.locals = {\n\t\"a\": \"_a\"\n};").unwrap();

        let mut config = batch_config(temp.path().to_path_buf());
        config.ignore = vec!["*/dist/*".to_string()];
        let summary = run_batch_command(config).unwrap();

        assert_eq!(summary, BatchSummary::default());
        assert!(!dist.join("AStyles.re").exists());
    }

    #[test]
    fn test_format_summary() {
        colored::control::set_override(false);
        let summary = BatchSummary {
            created: 1,
            unchanged: 2,
            keyword_collisions: 3,
            ..Default::default()
        };
        assert_eq!(
            format_summary(&summary),
            "Processed 3 stylesheets: 1 created, 0 updated, 2 unchanged, 0 without exports, 3 keyword collisions dropped"
        );
    }
}
