//! Ordered in-memory record store with text-file persistence.
//!
//! The store is a growable sequence of [`ProcessRecord`]s kept in
//! insertion order. It does not enforce id uniqueness: `get`, `edit`
//! and `remove` act on the first record whose id matches.
//!
//! # Persistence
//!
//! - `load` appends every record parsed from a file, stopping at the
//!   first malformed line. Records parsed before that line are kept and
//!   the stop position is returned in a [`LoadReport`].
//! - `save` truncates the target and writes one line per record.
//!
//! An open failure on either path leaves the store untouched.

mod codec;

pub use codec::{format_line, parse_line, FIELD_COUNT};

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::ProcessRecord;

/// A line that stopped a load pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number.
    pub line: usize,
    /// Raw line content.
    pub content: String,
    /// Why the line was rejected.
    pub reason: String,
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records appended to the store.
    pub loaded: usize,
    /// The malformed line that ended the pass early, if any.
    pub stopped_at: Option<MalformedLine>,
}

impl LoadReport {
    /// Whether the whole input was consumed.
    pub fn is_complete(&self) -> bool {
        self.stopped_at.is_none()
    }
}

/// Insertion-ordered process record store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<ProcessRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records` in the given order.
    pub fn with_records(records: Vec<ProcessRecord>) -> Self {
        Self { records }
    }

    /// Appends a record. Never fails; duplicate ids are accepted.
    pub fn add(&mut self, record: ProcessRecord) {
        debug!(id = record.id, name = %record.name, "adding process record");
        self.records.push(record);
    }

    /// Removes the first record with `id` and returns it.
    pub fn remove(&mut self, id: i32) -> Result<ProcessRecord> {
        let index = self.position(id).ok_or_else(|| Error::not_found(id))?;
        debug!(id, index, "removing process record");
        Ok(self.records.remove(index))
    }

    /// Overwrites name, burst and priority of the first record with `id`.
    pub fn edit(
        &mut self,
        id: i32,
        name: impl Into<String>,
        burst: u32,
        priority: i32,
    ) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::not_found(id))?;
        record.update(name, burst, priority);
        debug!(id, "edited process record");
        Ok(())
    }

    /// Iterates records in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &ProcessRecord> + '_ {
        self.records.iter()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// First record with `id`.
    pub fn get(&self, id: i32) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Whether any record has `id`.
    pub fn contains(&self, id: i32) -> bool {
        self.position(id).is_some()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn position(&self, id: i32) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Appends records read from `path`.
    ///
    /// Fails with [`Error::Open`] if the file cannot be opened, in which
    /// case the store is unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "cannot open record file");
            Error::open(path, e)
        })?;

        let report = self.load_from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            loaded = report.loaded,
            complete = report.is_complete(),
            "loaded process records"
        );
        Ok(report)
    }

    /// Appends records read from `reader` until EOF or the first malformed line.
    ///
    /// A line that is not valid UTF-8 is malformed. Records are appended
    /// only once the pass finishes, so a read error leaves the store
    /// unchanged.
    pub fn load_from_reader<R: BufRead>(&mut self, mut reader: R) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        let mut parsed = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let parsed_line = match std::str::from_utf8(&buf) {
                Ok(text) => parse_line(text).map_err(|reason| (text.to_owned(), reason)),
                Err(_) => Err((
                    String::from_utf8_lossy(&buf).into_owned(),
                    "invalid UTF-8".to_owned(),
                )),
            };

            match parsed_line {
                Ok(Some(record)) => parsed.push(record),
                Ok(None) => {}
                Err((content, reason)) => {
                    warn!(line = line_no, %reason, "stopping load at malformed line");
                    report.stopped_at = Some(MalformedLine {
                        line: line_no,
                        content: content.trim_end_matches(['\r', '\n']).to_owned(),
                        reason,
                    });
                    break;
                }
            }
        }

        report.loaded = parsed.len();
        self.records.append(&mut parsed);
        Ok(report)
    }

    /// Writes every record to `path`, replacing its contents.
    ///
    /// Returns the number of records written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "cannot open record file for writing");
            Error::open(path, e)
        })?;

        let mut writer = BufWriter::new(file);
        let written = self.save_to_writer(&mut writer)?;
        writer.flush()?;
        info!(path = %path.display(), written, "saved process records");
        Ok(written)
    }

    /// Writes every record to `writer`, one per line.
    pub fn save_to_writer<W: Write>(&self, mut writer: W) -> Result<usize> {
        for record in &self.records {
            writeln!(writer, "{}", format_line(record))?;
        }
        Ok(self.records.len())
    }
}
