//! Persisted prime list
//!
//! One prime per line, ascending, append-only. The file is written only by
//! the prime store, so order is trusted on read and never re-validated.

use crate::bootstrap_file;
use crate::lines::{parse_prime, scan_lines};
use goldbach_core::{GoldbachError, GoldbachResult};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Append-only prime file
#[derive(Debug, Clone)]
pub struct PrimeLog {
    path: PathBuf,
}

impl PrimeLog {
    /// Open the prime log, creating an empty file if it does not exist
    pub fn open(path: impl Into<PathBuf>) -> GoldbachResult<Self> {
        let path = path.into();
        bootstrap_file(&path)?;
        Ok(Self { path })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every persisted prime in file order
    ///
    /// Blank and non-numeric lines are skipped.
    pub fn read_all(&self) -> GoldbachResult<Vec<u64>> {
        let mut primes = Vec::new();
        let stats = scan_lines(&self.path, |line| match parse_prime(line) {
            Some(p) => {
                primes.push(p);
                true
            }
            None => false,
        })?;

        if stats.ignored > 0 {
            warn!(
                path = %self.path.display(),
                ignored = stats.ignored,
                "Skipped malformed lines in prime log"
            );
        }
        debug!(path = %self.path.display(), count = primes.len(), "Read prime log");
        Ok(primes)
    }

    /// Append `primes` in the given order, one per line
    ///
    /// The batch is flushed and synced before returning. An empty batch
    /// does not touch the file.
    pub fn append(&self, primes: &[u64]) -> GoldbachResult<()> {
        if primes.is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| GoldbachError::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        for p in primes {
            writeln!(writer, "{}", p).map_err(|e| GoldbachError::io(&self.path, e))?;
        }
        writer
            .flush()
            .map_err(|e| GoldbachError::io(&self.path, e))?;
        writer
            .get_ref()
            .sync_data()
            .map_err(|e| GoldbachError::io(&self.path, e))?;

        debug!(path = %self.path.display(), count = primes.len(), "Appended primes");
        Ok(())
    }
}
