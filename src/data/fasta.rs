// fasta.rs - FASTA record iteration for return time calculation

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bio::io::fasta;
use regex::Regex;

/// A single FASTA record handed to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: Vec<u8>,
}

/// Include/exclude filters on record ids
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl RecordFilter {
    pub fn new(include: Option<Regex>, exclude: Option<Regex>) -> Self {
        Self { include, exclude }
    }

    pub fn accepts(&self, id: &str) -> bool {
        if let Some(include) = &self.include {
            if !include.is_match(id) {
                return false;
            }
        }
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(id) {
                return false;
            }
        }
        true
    }

    pub fn is_active(&self) -> bool {
        self.include.is_some() || self.exclude.is_some()
    }
}

/// Streaming reader over the records of one FASTA file.
///
/// Records rejected by the filter are counted and skipped.
pub struct FastaRecords {
    records: fasta::Records<BufReader<Box<dyn Read>>>,
    filter: RecordFilter,
    source: String,
    filtered: usize,
}

impl FastaRecords {
    /// Open a FASTA file
    pub fn from_path(path: &Path, filter: RecordFilter) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open FASTA file {}: {}", path.display(), e))?;
        Ok(Self::from_reader(
            Box::new(file),
            filter,
            path.display().to_string(),
        ))
    }

    /// Read FASTA records from any reader; `source` names it in error messages
    pub fn from_reader(reader: Box<dyn Read>, filter: RecordFilter, source: String) -> Self {
        Self {
            records: fasta::Reader::new(reader).records(),
            filter,
            source,
            filtered: 0,
        }
    }

    /// Number of records skipped by the id filter so far
    pub fn filtered(&self) -> usize {
        self.filtered
    }

    /// Pull up to `size` records
    pub fn next_chunk(&mut self, size: usize) -> Result<Vec<FastaRecord>, String> {
        let mut chunk = Vec::with_capacity(size);
        while chunk.len() < size {
            match self.next() {
                Some(record) => chunk.push(record?),
                None => break,
            }
        }
        Ok(chunk)
    }
}

impl Iterator for FastaRecords {
    type Item = Result<FastaRecord, String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => {
                    return Some(Err(format!(
                        "Invalid FASTA record in {}: {}",
                        self.source, e
                    )))
                }
            };

            if !self.filter.accepts(record.id()) {
                self.filtered += 1;
                continue;
            }

            return Some(Ok(FastaRecord {
                id: record.id().to_string(),
                sequence: record.seq().to_vec(),
            }));
        }
    }
}

/// Load every accepted record of a FASTA file
pub fn read_records(path: &Path, filter: RecordFilter) -> Result<Vec<FastaRecord>, String> {
    FastaRecords::from_path(path, filter)?.collect()
}
