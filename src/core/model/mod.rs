use std::path::PathBuf;

/// One report row: yield statistics for a single FASTQ file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSummary {
    pub file: String,
    pub n50: u64,
    pub total_reads: u64,
    pub total_bases: u64,
    pub mean_length: f64,
    pub max_length: u64,
    pub min_length: u64,
}

/// Result of processing one input path.
#[derive(Clone, Debug)]
pub enum FileOutcome {
    Summary(FileSummary),
    /// Parsed cleanly but held no reads.
    Empty { path: PathBuf },
    Failed { path: PathBuf, message: String },
}

/// All outcomes of a run, partitioned, each list in input order.
#[derive(Clone, Debug, Default)]
pub struct RunReport {
    pub summaries: Vec<FileSummary>,
    pub empty: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, String)>,
}

impl RunReport {
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = FileOutcome>,
    {
        let mut report = RunReport::default();
        for outcome in outcomes {
            match outcome {
                FileOutcome::Summary(s) => report.summaries.push(s),
                FileOutcome::Empty { path } => report.empty.push(path),
                FileOutcome::Failed { path, message } => report.failures.push((path, message)),
            }
        }
        report
    }
}
