//! Read lengths from a FASTQ stream.
//!
//! Record framing and validation are needletail's; only the sequence length
//! of each record is kept.

use needletail::FastxReader;
use needletail::errors::ParseError;
use needletail::parser::FastqReader;
use std::io::Read;

const READ_BUF: usize = 1024 * 1024;

pub struct ReadLengths<R: Read + Send> {
    reader: FastqReader<R>,
}

impl<R: Read + Send> ReadLengths<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: FastqReader::with_capacity(reader, READ_BUF),
        }
    }
}

impl<R: Read + Send> Iterator for ReadLengths<R> {
    type Item = Result<u64, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader
            .next()
            .map(|rec| rec.map(|rec| rec.seq().len() as u64))
    }
}
