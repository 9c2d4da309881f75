use crate::core::model::FileSummary;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 7] = [
    "file",
    "n50",
    "total_reads",
    "total_bases",
    "mean_length",
    "max_length",
    "min_length",
];

/// Writes the report next to `path` first and renames it into place, so a
/// failed write leaves no partial file behind.
pub fn write(path: &Path, rows: &[FileSummary]) -> Result<()> {
    let tmp_path = tmp_path(path);
    let result = write_to(&tmp_path, rows);
    match result {
        Ok(()) => fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to move report to {}", path.display())),
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            Err(e)
        }
    }
}

fn write_to(path: &Path, rows: &[FileSummary]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_rows(&mut w, rows)?;
    w.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

pub fn write_rows<W: Write>(w: &mut W, rows: &[FileSummary]) -> Result<()> {
    writeln!(w, "{}", HEADER.join(","))?;
    for row in rows {
        writeln!(
            w,
            "{},{},{},{},{:?},{},{}",
            escape(&row.file),
            row.n50,
            row.total_reads,
            row.total_bases,
            row.mean_length,
            row.max_length,
            row.min_length
        )?;
    }
    Ok(())
}

fn escape(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
