use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "multirip")]
#[command(author, version, about = "Rip titles from several optical drives at once with HandBrakeCLI")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a default config file
    Init,

    /// Verify the configuration and paths
    Verify,

    /// Execute rip jobs from a jobs file
    Run {
        /// Jobs file (TOML)
        #[arg(required = true)]
        jobs: PathBuf,

        /// Show what would be done without executing
        #[arg(long)]
        dry_run: bool,

        /// Directory for per-drive log files (overrides output.log_dir)
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },

    /// Scan a drive to find the 'Play All' title
    Scan {
        /// Drive device or path
        #[arg(required = true)]
        drive: String,

        /// Also list every title found
        #[arg(long)]
        list: bool,
    },
}
