use std::path::PathBuf;

use clap::Parser;

use lockstep_core::limits::{DEFAULT_HALF_WINDOW, DEFAULT_MAX_MISMATCHES};

#[derive(Parser)]
#[command(
    name = "lockstep",
    about = "Positional comparison of two files with bounded diagnostic context",
    version,
)]
pub struct Cli {
    /// File providing the expected sequence, one element per line.
    pub expected: PathBuf,

    /// File providing the actual sequence, one element per line.
    pub actual: PathBuf,

    /// Equal lines kept before and after each mismatch.
    #[arg(long, default_value_t = DEFAULT_HALF_WINDOW)]
    pub half_window: usize,

    /// Stop collecting mismatch detail after this many mismatches.
    #[arg(long, default_value_t = DEFAULT_MAX_MISMATCHES)]
    pub max_mismatches: usize,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
