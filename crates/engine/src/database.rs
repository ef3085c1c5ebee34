//! Database handle over a data directory
//!
//! `Database` is the single owner of a directory's prime store and pair log.
//! Opening it takes an exclusive advisory lock on `goldbach.lock`; a second
//! handle on the same directory (from this or another process) fails with
//! `Locked` instead of interleaving appends.
//!
//! # Example
//!
//! ```ignore
//! let mut db = Database::open(path)?;
//! db.ensure_primes_up_to(10_000)?;
//! let report = db.enumerate_goldbach_up_to(10_000)?;
//! ```

use crate::config::GoldbachConfig;
use crate::enumerator::{EnumerationReport, GoldbachEnumerator};
use crate::prime_store::PrimeStore;
use fs2::FileExt;
use goldbach_core::{GoldbachError, GoldbachRecord, GoldbachResult, MIN_GOLDBACH_EVEN};
use goldbach_durability::{PairLog, PrimeLog};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the lock file inside a data directory
pub const LOCK_FILE_NAME: &str = "goldbach.lock";

/// Summary of a data directory's persisted state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    /// Largest value whose primality is known
    pub known_bound: u64,
    /// Number of known primes
    pub prime_count: usize,
    /// Even numbers with at least one persisted record
    pub completed_evens: usize,
}

/// Outcome of [`Database::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Primes discovered by the prime phase
    pub new_primes: usize,
    /// Counters from the Goldbach phase
    pub enumeration: EnumerationReport,
}

/// Owning handle over one data directory
#[derive(Debug)]
pub struct Database {
    data_dir: PathBuf,
    config: GoldbachConfig,
    store: PrimeStore,
    enumerator: GoldbachEnumerator,
    lock: File,
}

impl Database {
    /// Open `dir` with the configuration found in it (or defaults)
    pub fn open(dir: impl AsRef<Path>) -> GoldbachResult<Self> {
        let dir = dir.as_ref();
        let config = GoldbachConfig::load(dir)?;
        Self::open_with_config(dir, config)
    }

    /// Open `dir` with an explicit configuration
    ///
    /// Creates the directory and both logs if missing, locks the directory,
    /// and loads the prime store.
    pub fn open_with_config(dir: impl AsRef<Path>, config: GoldbachConfig) -> GoldbachResult<Self> {
        config.validate()?;
        let data_dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).map_err(|e| GoldbachError::io(&data_dir, e))?;

        let lock = acquire_lock(&data_dir.join(LOCK_FILE_NAME))?;

        let store = PrimeStore::load(PrimeLog::open(config.primes_path(&data_dir))?)?;
        let pairs = PairLog::open(config.pairs_path(&data_dir), config.durability)?;

        debug!(
            data_dir = %data_dir.display(),
            durability = %config.durability,
            known_bound = store.known_bound(),
            "Opened database"
        );
        Ok(Self {
            data_dir,
            config,
            store,
            enumerator: GoldbachEnumerator::new(pairs),
            lock,
        })
    }

    /// Make primality known for every value in `[0, n]`
    ///
    /// Returns the number of newly discovered primes.
    pub fn ensure_primes_up_to(&mut self, n: u64) -> GoldbachResult<usize> {
        self.store.ensure_primes_up_to(n)
    }

    /// Primality of `x`; `OutOfRange` if `x` is past the known bound
    pub fn is_prime(&self, x: u64) -> GoldbachResult<bool> {
        self.store.is_prime(x)
    }

    /// All known primes, ascending
    pub fn primes(&self) -> &[u64] {
        self.store.primes()
    }

    /// Largest value whose primality is known
    pub fn known_bound(&self) -> u64 {
        self.store.known_bound()
    }

    /// Record every Goldbach decomposition for even numbers in `[4, up_to]`
    /// not already in the pair log
    pub fn enumerate_goldbach_up_to(&mut self, up_to: u64) -> GoldbachResult<EnumerationReport> {
        self.enumerator.enumerate_up_to(&mut self.store, up_to)
    }

    /// Primes up to `n`, then Goldbach pairs up to `n`
    ///
    /// Checks the range before either phase runs. Repeating a call with the
    /// same `n` sieves nothing and appends nothing.
    pub fn run(&mut self, n: u64) -> GoldbachResult<RunReport> {
        if n < MIN_GOLDBACH_EVEN {
            return Err(GoldbachError::InvalidRange { up_to: n });
        }
        let new_primes = self.ensure_primes_up_to(n)?;
        let enumeration = self.enumerate_goldbach_up_to(n)?;
        Ok(RunReport {
            new_primes,
            enumeration,
        })
    }

    /// Every well-formed record in the pair log, in file order
    pub fn records(&self) -> GoldbachResult<Vec<GoldbachRecord>> {
        self.enumerator.log().read_records()
    }

    /// Summary of the persisted state
    pub fn info(&self) -> GoldbachResult<DatabaseInfo> {
        Ok(DatabaseInfo {
            known_bound: self.store.known_bound(),
            prime_count: self.store.len(),
            completed_evens: self.enumerator.log().completed_evens()?.len(),
        })
    }

    /// Configuration in effect
    pub fn config(&self) -> &GoldbachConfig {
        &self.config
    }

    /// The data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        if let Err(e) = self.lock.unlock() {
            warn!(
                data_dir = %self.data_dir.display(),
                error = %e,
                "Failed to release data directory lock"
            );
        }
    }
}

fn acquire_lock(path: &Path) -> GoldbachResult<File> {
    let file = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| GoldbachError::io(path, e))?;

    match file.try_lock_exclusive() {
        Ok(()) => Ok(file),
        Err(e) if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() => {
            Err(GoldbachError::Locked {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(GoldbachError::io(path, e)),
    }
}
