use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use memmap2::Mmap;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputKind {
    /// Zero bytes on disk, whatever the extension says.
    Empty,
    Plain,
    Gzip,
}

/// Read-only mapping of a plain FASTQ file.
pub struct MmapSource {
    mmap: Mmap,
    pos: usize,
}

impl MmapSource {
    pub fn open(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        // SAFETY: read-only file mapping.
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("mmap failed for {}", path.display()))?;
        Ok(Self { mmap, pos: 0 })
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }
}

impl Read for MmapSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let rest = &self.mmap[self.pos..];
        let n = rest.len().min(buf.len());
        buf[..n].copy_from_slice(&rest[..n]);
        self.pos += n;
        Ok(n)
    }
}

/// An opened FASTQ byte stream. Dropping it releases the file.
pub enum InputSource {
    Empty,
    Mmap(MmapSource),
    Gzip(MultiGzDecoder<BufReader<File>>),
}

impl InputSource {
    pub fn open(path: &Path) -> Result<Self> {
        match detect_input_kind(path)? {
            InputKind::Empty => Ok(InputSource::Empty),
            InputKind::Plain => Ok(InputSource::Mmap(MmapSource::open(path)?)),
            InputKind::Gzip => Ok(InputSource::Gzip(open_gzip_reader(path)?)),
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            InputSource::Empty => InputKind::Empty,
            InputSource::Mmap(_) => InputKind::Plain,
            InputSource::Gzip(_) => InputKind::Gzip,
        }
    }
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::Empty => Ok(0),
            InputSource::Mmap(src) => src.read(buf),
            InputSource::Gzip(src) => src.read(buf),
        }
    }
}

/// A zero-byte file is `Empty` before any suffix or magic check, so an empty
/// `.gz` yields no reads instead of a truncated-stream error.
pub fn detect_input_kind(path: &Path) -> Result<InputKind> {
    let meta =
        fs::metadata(path).with_context(|| format!("failed to open {}", path.display()))?;
    if meta.len() == 0 {
        return Ok(InputKind::Empty);
    }
    if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
        if ext.eq_ignore_ascii_case("gz") {
            return Ok(InputKind::Gzip);
        }
    }
    let mut file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut magic = [0u8; 2];
    let mut n = 0;
    while n < magic.len() {
        let read = file
            .read(&mut magic[n..])
            .with_context(|| format!("failed to read magic bytes of {}", path.display()))?;
        if read == 0 {
            break;
        }
        n += read;
    }
    if n == 2 && magic == GZIP_MAGIC {
        Ok(InputKind::Gzip)
    } else {
        Ok(InputKind::Plain)
    }
}

pub fn open_gzip_reader(path: &Path) -> Result<MultiGzDecoder<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(MultiGzDecoder::new(BufReader::new(file)))
}
