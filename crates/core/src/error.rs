//! Error types for the Goldbach engine
//!
//! Every fallible operation in the workspace returns [`GoldbachResult`].
//! Malformed persisted lines are NOT errors; readers skip them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the workspace
pub type GoldbachResult<T> = std::result::Result<T, GoldbachError>;

/// Errors raised by the prime store, the enumerator and the persistence layer
#[derive(Debug, Error)]
pub enum GoldbachError {
    /// A Goldbach bound below 4 was requested
    #[error("invalid Goldbach range: upper bound {up_to} is below 4")]
    InvalidRange {
        /// The rejected upper bound
        up_to: u64,
    },

    /// Primality was queried beyond the sieved bound
    ///
    /// The caller must grow the store with `ensure_primes_up_to` first.
    #[error("primality of {value} is unknown: primes are only known up to {known_bound}")]
    OutOfRange {
        /// The value that was queried
        value: u64,
        /// The store's bound at query time
        known_bound: u64,
    },

    /// The bound cannot be addressed as a sieve index on this platform
    #[error("bound {bound} is too large to sieve on this platform")]
    BoundTooLarge {
        /// The rejected bound
        bound: u64,
    },

    /// A persisted file could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Configuration could not be parsed or failed validation
    #[error("invalid configuration: {reason}")]
    Config {
        /// What was wrong
        reason: String,
    },

    /// Another handle already owns the data directory
    #[error("data directory {} is locked by another handle", path.display())]
    Locked {
        /// The lock file
        path: PathBuf,
    },
}

impl GoldbachError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GoldbachError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        GoldbachError::Config {
            reason: reason.into(),
        }
    }

    /// True for errors that indicate a caller-ordering bug rather than a
    /// runtime condition
    pub fn is_programming_error(&self) -> bool {
        matches!(self, GoldbachError::OutOfRange { .. })
    }
}
