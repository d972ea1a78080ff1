//! Streaming FASTA reader
//!
//! # Format
//!
//! ```text
//! >sp|P0A7G6|RECA_ECOLI Protein RecA
//! MAIDENKQKALAAALGQIEKQFGKGSIMRLGEDRSMDVETISTGSLSLDIALGAGGLPMG
//! RIVEIYGPESSGKTTLTLQVIAAAQREGKTCAFIDAEHALDPIYARKLGVDIDNLLCSQP
//! >P1
//! MKT
//! ```
//!
//! - The identifier is the first whitespace-delimited token after `>`;
//!   the rest of the header becomes the description.
//! - Sequence lines are concatenated with all whitespace removed.
//! - Blank lines and `;` comment lines are skipped anywhere.
//! - Records are yielded one at a time; the whole file is never held in memory.

use crate::error::{CoreError, Result};
use crate::record::Record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Iterator over the records of a FASTA stream
pub struct FastaReader<R> {
    reader: R,
    line: String,
    line_number: usize,
    pending: Option<(String, String)>,
    records_read: usize,
    finished: bool,
}

impl FastaReader<BufReader<File>> {
    /// Open a FASTA file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "opened FASTA input");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FastaReader<R> {
    /// Wrap any buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
            pending: None,
            records_read: 0,
            finished: false,
        }
    }

    /// Number of records yielded so far
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    fn read_line(&mut self) -> Result<bool> {
        self.line.clear();
        let n = self.reader.read_line(&mut self.line)?;
        if n > 0 {
            self.line_number += 1;
        }
        Ok(n > 0)
    }

    fn parse_header(line_number: usize, header: &str) -> Result<(String, String)> {
        let header = header.trim();
        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("");
        if id.is_empty() {
            return Err(CoreError::InvalidFasta {
                line: line_number,
                msg: "header has no identifier".to_string(),
            });
        }
        let description = parts.next().map(str::trim).unwrap_or("");
        Ok((id.to_string(), description.to_string()))
    }

    fn next_record(&mut self) -> Result<Option<Record>> {
        if self.finished {
            return Ok(None);
        }

        let (id, description) = match self.pending.take() {
            Some(header) => header,
            None => loop {
                if !self.read_line()? {
                    self.finished = true;
                    return Ok(None);
                }
                let trimmed = self.line.trim();
                if trimmed.is_empty() || trimmed.starts_with(';') {
                    continue;
                }
                if let Some(header) = trimmed.strip_prefix('>') {
                    break Self::parse_header(self.line_number, header)?;
                }
                return Err(CoreError::InvalidFasta {
                    line: self.line_number,
                    msg: "sequence data before the first '>' header".to_string(),
                });
            },
        };

        let mut sequence = String::new();
        loop {
            if !self.read_line()? {
                self.finished = true;
                break;
            }
            let trimmed = self.line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') {
                continue;
            }
            if let Some(header) = trimmed.strip_prefix('>') {
                self.pending = Some(Self::parse_header(self.line_number, header)?);
                break;
            }
            sequence.extend(trimmed.chars().filter(|c| !c.is_whitespace()));
        }

        self.records_read += 1;
        Ok(Some(Record {
            id,
            description,
            sequence,
        }))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                tracing::trace!(records = self.records_read, "FASTA input exhausted");
                None
            }
            Err(e) => {
                // A malformed stream cannot be resynchronised reliably
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
