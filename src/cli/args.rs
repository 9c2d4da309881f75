use clap::{ArgGroup, Parser};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "n50_results.csv";

#[derive(Parser, Debug)]
#[command(
    name = "ont-n50",
    version,
    about = "Calculate N50 for nanopore reads."
)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["file", "directory"]),
))]
pub struct Cli {
    /// Input FASTQ file (can be .gz compressed).
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory containing FASTQ files.
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Output CSV file.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}
