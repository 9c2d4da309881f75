//! FASTQ file discovery.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

pub const FASTQ_EXTENSIONS: [&str; 4] = [".fastq", ".fq", ".fastq.gz", ".fq.gz"];

pub fn is_fastq_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    FASTQ_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// A `--file` input is taken as given; a path that is not an existing file
/// yields no candidates.
pub fn single_file(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        Vec::new()
    }
}

/// Recursively collects FASTQ files under `root`, top-down: each
/// directory's matching files in name order, then its subdirectories in
/// name order. Directory symlinks are not followed.
pub fn fastq_files(root: &Path) -> Result<Vec<PathBuf>> {
    let meta = fs::metadata(root)
        .with_context(|| format!("directory not found: {}", root.display()))?;
    if !meta.is_dir() {
        bail!("not a directory: {}", root.display());
    }
    let mut out = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    let mut first = true;
    while let Some(dir) = pending.pop() {
        let (files, subdirs) = match list_dir(&dir) {
            Ok(v) => v,
            Err(e) if first => return Err(e),
            Err(e) => {
                println!("Warning: skipping {}: {:#}", dir.display(), e);
                continue;
            }
        };
        first = false;
        out.extend(files);
        pending.extend(subdirs.into_iter().rev());
    }
    Ok(out)
}

fn list_dir(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;
    let mut entries = entries
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to list directory {}", dir.display()))?;
    entries.sort_by_key(|e| e.file_name());

    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for entry in entries {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", path.display()))?;
        if file_type.is_dir() {
            subdirs.push(path);
            continue;
        }
        let is_file = if file_type.is_symlink() {
            fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false)
        } else {
            file_type.is_file()
        };
        if is_file && entry.file_name().to_str().is_some_and(is_fastq_name) {
            files.push(path);
        }
    }
    Ok((files, subdirs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    fn names(root: &Path, paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn extension_filter() {
        assert!(is_fastq_name("reads.fastq"));
        assert!(is_fastq_name("reads.fq"));
        assert!(is_fastq_name("reads.fastq.gz"));
        assert!(is_fastq_name("reads.fq.gz"));
        assert!(is_fastq_name("READS.FASTQ.GZ"));
        assert!(is_fastq_name("Reads.Fq"));
        assert!(!is_fastq_name("reads.fasta"));
        assert!(!is_fastq_name("reads.fq.bz2"));
        assert!(!is_fastq_name("reads.gz"));
        assert!(!is_fastq_name("fastq"));
    }

    #[test]
    fn recursive_top_down_order() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("b.fq"));
        touch(&root.join("a.FASTQ.gz"));
        touch(&root.join("notes.txt"));
        touch(&root.join("run2/z.fq"));
        touch(&root.join("run1/deep/x.fastq"));
        touch(&root.join("run1/y.fq.gz"));

        let found = fastq_files(root).unwrap();
        assert_eq!(
            names(root, &found),
            vec!["a.FASTQ.gz", "b.fq", "run1/y.fq.gz", "run1/deep/x.fastq", "run2/z.fq"]
        );
    }

    #[test]
    fn directory_named_like_fastq_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("weird.fq")).unwrap();
        touch(&dir.path().join("weird.fq/inner.fq"));

        let found = fastq_files(dir.path()).unwrap();
        assert_eq!(names(dir.path(), &found), vec!["weird.fq/inner.fq"]);
    }

    #[test]
    fn empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(fastq_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = fastq_files(&dir.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("directory not found"));
    }

    #[test]
    fn file_as_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.fq");
        touch(&path);
        assert!(fastq_files(&path).is_err());
    }

    #[test]
    fn single_file_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reads.txt");
        touch(&path);
        assert_eq!(single_file(&path), vec![path.clone()]);
        assert!(single_file(&dir.path().join("nope.fq")).is_empty());
        assert!(single_file(dir.path()).is_empty());
    }
}
