use crate::core::model::FileSummary;
use crate::core::n50::n50;

/// Per-file read length aggregate. Keeps one length per read for the N50
/// sort; everything else is running totals.
#[derive(Clone, Debug)]
pub struct LengthAgg {
    pub lengths: Vec<u64>,
    pub total_bases: u64,
    pub min_len: u64,
    pub max_len: u64,
}

impl Default for LengthAgg {
    fn default() -> Self {
        Self::new()
    }
}

impl LengthAgg {
    pub fn new() -> Self {
        Self {
            lengths: Vec::new(),
            total_bases: 0,
            min_len: u64::MAX,
            max_len: 0,
        }
    }

    pub fn update_read(&mut self, len: u64) {
        self.lengths.push(len);
        self.total_bases += len;
        if len > self.max_len {
            self.max_len = len;
        }
        if len < self.min_len {
            self.min_len = len;
        }
    }

    pub fn total_reads(&self) -> u64 {
        self.lengths.len() as u64
    }

    /// `None` when no reads were seen.
    pub fn finalize(self, file: String) -> Option<FileSummary> {
        let total_reads = self.total_reads();
        if total_reads == 0 {
            return None;
        }
        let mut lengths = self.lengths;
        Some(FileSummary {
            file,
            n50: n50(&mut lengths),
            total_reads,
            total_bases: self.total_bases,
            mean_length: self.total_bases as f64 / total_reads as f64,
            max_length: self.max_len,
            min_length: self.min_len,
        })
    }
}

impl FromIterator<u64> for LengthAgg {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut agg = LengthAgg::new();
        for len in iter {
            agg.update_read(len);
        }
        agg
    }
}
