use anyhow::Result;
use clap::Parser;
use recss::cli::{Cli, Commands};
use recss::commands::{BatchCommandConfig, GenerateConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Generate {
            resource,
            input,
            dest_dir,
            silent,
            quiet_output,
        } => recss::commands::handle_generate(GenerateConfig {
            resource,
            input,
            dest_dir,
            silent,
            quiet_output,
            config_path: cli.config,
        }),
        Commands::Batch {
            root,
            pattern,
            ignore,
            dest_dir,
            silent,
            jobs,
        } => recss::commands::handle_batch(BatchCommandConfig {
            root,
            pattern,
            ignore,
            dest_dir,
            silent,
            jobs,
            config_path: cli.config,
        }),
        Commands::Init { force } => recss::commands::init_config(force),
    }
}

// Side effect: install the global logger. RUST_LOG overrides the -v level.
fn init_logging(verbosity: u8) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_level(verbosity)),
    )
    .format_timestamp(None)
    .init();
}

// Pure function to map -v count to a log filter
fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
