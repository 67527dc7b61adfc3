use crate::error::{AltStartError, AltStartResult};
use crate::seq::record::SequenceRecord;
use log::warn;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Streaming reader over `>`-headed multi-line records.
///
/// Sequence lines are trimmed and concatenated. Lines seen before the first
/// header carry no record and are dropped with a warning.
pub struct FastaRecords<R> {
    reader: R,
    line_no: usize,
    pending_header: Option<String>,
    buf_line: String,
    seq_buf: Vec<u8>,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending_header: None,
            buf_line: String::new(),
            seq_buf: Vec::new(),
        }
    }

    fn next_header(&mut self) -> Option<AltStartResult<String>> {
        if let Some(pending) = self.pending_header.take() {
            return Some(Ok(pending));
        }

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    if self.buf_line.starts_with('>') {
                        return Some(Ok(self.buf_line.clone()));
                    }
                    if !self.buf_line.trim().is_empty() {
                        warn!(
                            "Ignoring sequence data before the first header (line {})",
                            self.line_no
                        );
                    }
                }
                Err(err) => return Some(Err(AltStartError::FastaIo(err))),
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = AltStartResult<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let header_line = match self.next_header()? {
            Ok(header) => header,
            Err(err) => return Some(Err(err)),
        };
        let header = parse_header(&header_line);

        self.seq_buf.clear();

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => break,
                Ok(_) => {
                    self.line_no += 1;
                    if self.buf_line.starts_with('>') {
                        self.pending_header = Some(self.buf_line.clone());
                        break;
                    }
                    self.seq_buf
                        .extend_from_slice(self.buf_line.trim().as_bytes());
                }
                Err(err) => return Some(Err(AltStartError::FastaIo(err))),
            }
        }

        let capacity = self.seq_buf.capacity();
        let sequence = std::mem::replace(&mut self.seq_buf, Vec::with_capacity(capacity));
        Some(Ok(SequenceRecord::new(header, sequence)))
    }
}

fn parse_header(header_line: &str) -> &str {
    let header = header_line.strip_prefix('>').unwrap_or(header_line);
    header.trim()
}

/// Header-keyed records in first-seen order.
///
/// A repeated header replaces the earlier sequence but keeps its slot, so
/// iteration order stays tied to where each header first appeared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceStore {
    records: Vec<SequenceRecord>,
    index: HashMap<Box<str>, usize>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: SequenceRecord) {
        match self.index.get(record.header()) {
            Some(&slot) => {
                warn!("Duplicate header overwrites earlier record: {}", record.header());
                self.records[slot] = record;
            }
            None => {
                self.index.insert(record.header.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, header: &str) -> Option<&SequenceRecord> {
        self.index.get(header).map(|&slot| &self.records[slot])
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SequenceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn from_reader<R: BufRead>(reader: R) -> AltStartResult<Self> {
        let mut store = Self::new();
        for record in FastaRecords::new(reader) {
            store.insert(record?);
        }
        Ok(store)
    }

    pub fn from_path(path: impl AsRef<Path>) -> AltStartResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_bytes(data: &[u8]) -> AltStartResult<Self> {
        Self::from_reader(BufReader::new(Cursor::new(data)))
    }
}

impl<'a> IntoIterator for &'a SequenceStore {
    type Item = &'a SequenceRecord;
    type IntoIter = std::slice::Iter<'a, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
