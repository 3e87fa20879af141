use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recss")]
#[command(about = "Generate ReasonML type definitions from CSS module class names", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv)
    /// -v: Report written stubs
    /// -vv: Show extraction details
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .recss.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the type stub for one stylesheet
    Generate {
        /// Stylesheet the processed output belongs to
        resource: PathBuf,

        /// Processed CSS-module output (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory: "current" for next to the stylesheet, or a path
        #[arg(long = "dest-dir", env = "RECSS_DEST_DIR")]
        dest_dir: Option<String>,

        /// Do not warn about class names that collide with ReasonML keywords
        #[arg(long)]
        silent: bool,

        /// Do not echo the processed output to stdout
        #[arg(short, long = "quiet-output")]
        quiet_output: bool,
    },

    /// Generate stubs for every processed output below a directory
    Batch {
        /// Directory to search
        #[arg(default_value = ".")]
        root: PathBuf,

        /// File name glob for processed outputs
        #[arg(short, long)]
        pattern: Option<String>,

        /// Skip outputs whose path matches this glob (repeatable)
        #[arg(long = "ignore")]
        ignore: Vec<String>,

        /// Output directory: "current" for next to the stylesheet, or a path
        #[arg(long = "dest-dir", env = "RECSS_DEST_DIR")]
        dest_dir: Option<String>,

        /// Do not warn about class names that collide with ReasonML keywords
        #[arg(long)]
        silent: bool,

        /// Worker threads (0 = use all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
