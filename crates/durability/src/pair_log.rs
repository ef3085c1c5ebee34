//! Persisted Goldbach records
//!
//! Format: `even,prime_a,prime_b` per line, append-only.
//!
//! # Streaming writes
//!
//! Records are never staged in memory. [`PairLog::appender`] hands out a
//! [`PairAppender`] that owns a buffered append handle for the duration of
//! one enumeration call. The appender flushes on every exit path: explicitly
//! through [`PairAppender::finish`], or from `Drop` when an error unwinds the
//! call early. A crash therefore leaves a valid prefix of whole lines.

use crate::bootstrap_file;
use crate::lines::{parse_even_field, parse_record, scan_lines};
use crate::mode::DurabilityMode;
use goldbach_core::{GoldbachError, GoldbachRecord, GoldbachResult};
use rustc_hash::FxHashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Append-only Goldbach record file
#[derive(Debug, Clone)]
pub struct PairLog {
    path: PathBuf,
    mode: DurabilityMode,
}

impl PairLog {
    /// Open the pair log, creating an empty file if it does not exist
    pub fn open(path: impl Into<PathBuf>, mode: DurabilityMode) -> GoldbachResult<Self> {
        let path = path.into();
        bootstrap_file(&path)?;
        Ok(Self { path, mode })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Durability mode used by appenders from this log
    pub fn mode(&self) -> DurabilityMode {
        self.mode
    }

    /// Collect the even numbers that already have at least one record
    ///
    /// Only the first field of each line is read. Lines whose first field
    /// is not an integer are skipped.
    pub fn completed_evens(&self) -> GoldbachResult<FxHashSet<u64>> {
        let mut done = FxHashSet::default();
        let stats = scan_lines(&self.path, |line| match parse_even_field(line) {
            Some(even) => {
                done.insert(even);
                true
            }
            None => false,
        })?;

        if stats.ignored > 0 {
            warn!(
                path = %self.path.display(),
                ignored = stats.ignored,
                "Skipped malformed lines in pair log"
            );
        }
        debug!(
            path = %self.path.display(),
            records = stats.parsed,
            completed = done.len(),
            "Loaded completed evens"
        );
        Ok(done)
    }

    /// Read every well-formed record in file order
    pub fn read_records(&self) -> GoldbachResult<Vec<GoldbachRecord>> {
        let mut records = Vec::new();
        scan_lines(&self.path, |line| match parse_record(line) {
            Some(record) => {
                records.push(record);
                true
            }
            None => false,
        })?;
        Ok(records)
    }

    /// Open a streaming appender positioned at the end of the file
    pub fn appender(&self) -> GoldbachResult<PairAppender> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| GoldbachError::io(&self.path, e))?;
        Ok(PairAppender {
            writer: BufWriter::new(file),
            path: self.path.clone(),
            mode: self.mode,
            written: 0,
            finished: false,
        })
    }
}

/// Scoped append handle for one enumeration call
pub struct PairAppender {
    writer: BufWriter<File>,
    path: PathBuf,
    mode: DurabilityMode,
    written: u64,
    finished: bool,
}

impl PairAppender {
    /// Write one record line
    pub fn append(&mut self, record: &GoldbachRecord) -> GoldbachResult<()> {
        writeln!(self.writer, "{}", record).map_err(|e| GoldbachError::io(&self.path, e))?;
        self.written += 1;
        Ok(())
    }

    /// Mark the end of one even number's records
    ///
    /// In [`DurabilityMode::Always`] the buffered lines are flushed and synced.
    pub fn end_even(&mut self) -> GoldbachResult<()> {
        if self.mode.syncs_per_even() {
            self.sync()?;
        }
        Ok(())
    }

    /// Records written through this appender so far
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush, sync and close; returns the number of records written
    pub fn finish(mut self) -> GoldbachResult<u64> {
        self.sync()?;
        self.finished = true;
        Ok(self.written)
    }

    fn sync(&mut self) -> GoldbachResult<()> {
        self.writer
            .flush()
            .map_err(|e| GoldbachError::io(&self.path, e))?;
        self.writer
            .get_ref()
            .sync_data()
            .map_err(|e| GoldbachError::io(&self.path, e))
    }
}

impl Drop for PairAppender {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(e) = self.writer.flush() {
            warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to flush pair log on early exit"
            );
        }
    }
}
