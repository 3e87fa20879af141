use super::resolve_config;
use crate::io::RealFileSystem;
use crate::pipeline::{PipelineOutcome, StubPipeline};
use crate::processor::PrecompiledProcessor;
use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub resource: PathBuf,
    pub input: Option<PathBuf>,
    pub dest_dir: Option<String>,
    pub silent: bool,
    pub quiet_output: bool,
    pub config_path: Option<PathBuf>,
}

pub fn handle_generate(config: GenerateConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_generate(config, stdin.lock(), &mut stdout.lock())
}

/// Generate one stub, reading processed text from `input` when no file is given.
pub fn run_generate<R: Read, W: Write>(
    config: GenerateConfig,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let settings = resolve_config(config.config_path.as_deref())?
        .with_overrides(config.dest_dir, config.silent);

    let processor = match config.input {
        Some(path) => PrecompiledProcessor::from_file(path),
        None => {
            let mut content = String::new();
            input
                .read_to_string(&mut content)
                .context("Failed to read processed output from stdin")?;
            PrecompiledProcessor::from_content(content)
        }
    };

    let pipeline = StubPipeline::new(processor, RealFileSystem::new(), settings);
    let output = pipeline
        .run(&config.resource)
        .with_context(|| format!("Failed to generate stub for {}", config.resource.display()))?;

    match &output.outcome {
        PipelineOutcome::PassThrough => {
            log::info!("{} exports no class names", config.resource.display());
        }
        PipelineOutcome::Written { path, write, .. } => {
            log::info!("{} {}", path.display(), write);
        }
    }

    if !config.quiet_output {
        out.write_all(output.content.as_bytes())?;
        out.flush()?;
    }

    Ok(())
}
