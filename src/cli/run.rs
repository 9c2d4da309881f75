use crate::cli::args::Cli;
use crate::core::engine::{self, InputSelection, RunConfig};
use crate::core::stats::{STATS_ENV, fmt_dur, log_stage, stats_enabled};
use crate::report;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::time::Instant;

pub fn entry() -> Result<()> {
    let cli = Cli::parse();
    run(config_from(cli)?)
}

fn config_from(cli: Cli) -> Result<RunConfig> {
    let input = match (cli.file, cli.directory) {
        (Some(file), None) => InputSelection::File(file),
        (None, Some(dir)) => InputSelection::Directory(dir),
        _ => bail!("exactly one of --file or --directory is required"),
    };
    Ok(RunConfig {
        input,
        output: cli.output,
    })
}

fn run(cfg: RunConfig) -> Result<()> {
    let stats = stats_enabled();
    let t0 = Instant::now();

    let t_locate = Instant::now();
    let paths = match engine::candidates(&cfg.input) {
        Ok(paths) => paths,
        Err(e) => {
            println!("Error: {:#}", e);
            return Ok(());
        }
    };
    log_stage(stats, "locate", t_locate);

    if paths.is_empty() {
        println!("No FASTQ files found to process.");
        return Ok(());
    }

    let t_engine = Instant::now();
    let outcome = engine::run(&paths);
    log_stage(stats, "engine", t_engine);
    if stats {
        eprintln!(
            "{} files={} summaries={} empty={} failed={}",
            STATS_ENV,
            paths.len(),
            outcome.summaries.len(),
            outcome.empty.len(),
            outcome.failures.len()
        );
    }

    if outcome.summaries.is_empty() {
        println!("No results to write.");
    } else {
        let t_csv = Instant::now();
        report::csv::write(&cfg.output, &outcome.summaries)
            .with_context(|| format!("failed to write {}", cfg.output.display()))?;
        log_stage(stats, "csv", t_csv);
        println!("Results written to {}", cfg.output.display());
    }

    if stats {
        eprintln!("{} total={}", STATS_ENV, fmt_dur(t0.elapsed()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn file_flag_selects_single_file() {
        let cli = Cli::try_parse_from(["ont-n50", "--file", "reads.fq.gz"]).unwrap();
        let cfg = config_from(cli).unwrap();
        assert!(
            matches!(cfg.input, InputSelection::File(ref p) if p == &PathBuf::from("reads.fq.gz"))
        );
        assert_eq!(cfg.output, PathBuf::from("n50_results.csv"));
    }

    #[test]
    fn directory_flag_selects_directory() {
        let cli = Cli::try_parse_from(["ont-n50", "-d", "runs", "-o", "out.csv"]).unwrap();
        let cfg = config_from(cli).unwrap();
        assert!(
            matches!(cfg.input, InputSelection::Directory(ref p) if p == &PathBuf::from("runs"))
        );
        assert_eq!(cfg.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn config_needs_exactly_one_input() {
        let both = Cli {
            file: Some(PathBuf::from("a.fq")),
            directory: Some(PathBuf::from("runs")),
            output: PathBuf::from("out.csv"),
        };
        let neither = Cli {
            file: None,
            directory: None,
            output: PathBuf::from("out.csv"),
        };
        for cli in [both, neither] {
            let err = config_from(cli).err().unwrap();
            assert!(err.to_string().contains("exactly one of --file or --directory"));
        }
    }
}
