use crate::core::fastq::ReadLengths;
use crate::core::io::{InputKind, InputSource};
use crate::core::locate;
use crate::core::metrics::LengthAgg;
use crate::core::model::{FileOutcome, FileSummary, RunReport};
use crate::core::stats::{STATS_ENV, fmt_dur, log_stage, stats_enabled};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub enum InputSelection {
    File(PathBuf),
    Directory(PathBuf),
}

pub struct RunConfig {
    pub input: InputSelection,
    pub output: PathBuf,
}

/// Candidate FASTQ paths for a run, in processing order.
pub fn candidates(input: &InputSelection) -> Result<Vec<PathBuf>> {
    match input {
        InputSelection::File(path) => Ok(locate::single_file(path)),
        InputSelection::Directory(dir) => locate::fastq_files(dir),
    }
}

/// Processes `paths` one at a time. A failing file never stops the rest.
pub fn run(paths: &[PathBuf]) -> RunReport {
    let stats = stats_enabled();
    let t_total = Instant::now();
    let outcomes = paths.iter().map(|path| {
        println!("Processing {}...", path.display());
        let outcome = process_file(path);
        match &outcome {
            FileOutcome::Summary(_) => {}
            FileOutcome::Empty { path } => println!("No reads found in {}", path.display()),
            FileOutcome::Failed { path, message } => {
                println!("Error processing {}: {}", path.display(), message)
            }
        }
        outcome
    });
    let report = RunReport::from_outcomes(outcomes);
    log_stage(stats, "engine.total", t_total);
    report
}

pub fn process_file(path: &Path) -> FileOutcome {
    match summarize_file(path) {
        Ok(Some(summary)) => FileOutcome::Summary(summary),
        Ok(None) => FileOutcome::Empty {
            path: path.to_path_buf(),
        },
        Err(e) => FileOutcome::Failed {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        },
    }
}

/// `Ok(None)` when the file parsed cleanly but held no reads.
pub fn summarize_file(path: &Path) -> Result<Option<FileSummary>> {
    let stats = stats_enabled();
    let t0 = Instant::now();

    let source = InputSource::open(path)?;
    let kind = source.kind();
    let mapped_bytes = match &source {
        InputSource::Empty => Some(0),
        InputSource::Mmap(m) => Some(m.len()),
        InputSource::Gzip(_) => None,
    };

    let agg = read_lengths(source)
        .with_context(|| format!("failed to parse FASTQ records in {}", path.display()))?;

    if stats {
        let bytes = mapped_bytes
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        eprintln!(
            "{} file={} kind={} bytes={} reads={} bases={} time={}",
            STATS_ENV,
            path.display(),
            kind_name(kind),
            bytes,
            agg.total_reads(),
            agg.total_bases,
            fmt_dur(t0.elapsed())
        );
    }

    Ok(agg.finalize(file_name(path)))
}

/// Drains `source` into a length aggregate. `source` is dropped on return,
/// on both the success and the error path.
pub fn read_lengths(source: InputSource) -> Result<LengthAgg> {
    let mut agg = LengthAgg::new();
    for len in ReadLengths::new(source) {
        agg.update_read(len?);
    }
    Ok(agg)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn kind_name(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Empty => "empty",
        InputKind::Plain => "plain",
        InputKind::Gzip => "gzip",
    }
}
