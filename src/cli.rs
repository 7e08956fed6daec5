use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sample sequence baked into the binary for the bare invocation.
pub const DEMO_SAMPLE: [i32; 7] = [2, 4, 2, 5, 7, 8, 9];

#[derive(Parser, Debug)]
#[command(name = "runnerup", version, about = "Second largest element CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the scan over the built-in sample sequence.
    Demo,
    /// Report the second largest distinct value of a sequence.
    Find {
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        #[arg(
            long,
            conflicts_with = "values",
            help = "Read the sequence from a file (whitespace or comma separated)"
        )]
        file: Option<PathBuf>,
    },
    /// Show counts and both extrema of a sequence.
    Inspect {
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        #[arg(
            long,
            conflicts_with = "values",
            help = "Read the sequence from a file (whitespace or comma separated)"
        )]
        file: Option<PathBuf>,
    },
}
