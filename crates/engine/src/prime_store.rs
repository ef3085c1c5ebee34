//! Prime Store
//!
//! Holds every prime in `[2, known_bound]` in ascending order plus an O(1)
//! primality table over `[0, known_bound]`.
//!
//! # Invariants
//!
//! - `known_bound` never decreases
//! - `primes` is append-only and strictly increasing
//! - `table[x]` agrees with `primes` for every `x <= known_bound`
//! - the prime log holds exactly `primes`, in the same order
//!
//! Growth re-sieves `[0, n]` from scratch rather than sieving only the new
//! segment. Growth requests are expected to be few and increasing.

use crate::sieve::{sieve, table_len};
use goldbach_core::{GoldbachError, GoldbachResult};
use goldbach_durability::PrimeLog;
use tracing::{debug, info};

/// Growing, persisted set of known primes
#[derive(Debug)]
pub struct PrimeStore {
    known_bound: u64,
    primes: Vec<u64>,
    table: Vec<bool>,
    log: PrimeLog,
}

impl PrimeStore {
    /// Load the store from its prime log
    ///
    /// The log is trusted to be ascending. `known_bound` becomes the last
    /// persisted prime (0 when the log is empty).
    pub fn load(log: PrimeLog) -> GoldbachResult<Self> {
        let primes = log.read_all()?;
        let known_bound = primes.last().copied().unwrap_or(0);

        let mut table = vec![false; table_len(known_bound)?];
        for &p in &primes {
            // an out-of-order log can hold values past the last line
            if let Some(slot) = usize::try_from(p).ok().and_then(|i| table.get_mut(i)) {
                *slot = true;
            }
        }

        debug!(
            path = %log.path().display(),
            primes = primes.len(),
            known_bound,
            "Loaded prime store"
        );
        Ok(Self {
            known_bound,
            primes,
            table,
            log,
        })
    }

    /// Make primality known for every value in `[0, n]`
    ///
    /// No-op when `n <= known_bound`. Otherwise re-sieves `[0, n]`, appends
    /// the newly found primes to memory and to the prime log, and raises
    /// `known_bound` to `n`.
    ///
    /// Returns the number of newly discovered primes.
    pub fn ensure_primes_up_to(&mut self, n: u64) -> GoldbachResult<usize> {
        if n <= self.known_bound {
            debug!(requested = n, known_bound = self.known_bound, "Primes already known");
            return Ok(0);
        }

        let table = sieve(n)?;
        let discovered: Vec<u64> = (self.known_bound + 1..=n)
            .filter(|&x| table[x as usize])
            .collect();

        // persist first so a failed append leaves memory matching the log
        self.log.append(&discovered)?;

        let previous = self.known_bound;
        self.primes.extend_from_slice(&discovered);
        self.table = table;
        self.known_bound = n;

        info!(
            previous_bound = previous,
            known_bound = n,
            new_primes = discovered.len(),
            total_primes = self.primes.len(),
            "Grew prime store"
        );
        Ok(discovered.len())
    }

    /// Constant-time primality lookup
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `x > known_bound`: grow the store first.
    #[inline]
    pub fn is_prime(&self, x: u64) -> GoldbachResult<bool> {
        if x > self.known_bound {
            return Err(GoldbachError::OutOfRange {
                value: x,
                known_bound: self.known_bound,
            });
        }
        Ok(self.table[x as usize])
    }

    /// Largest value whose primality is known
    pub fn known_bound(&self) -> u64 {
        self.known_bound
    }

    /// All known primes, ascending
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// Number of known primes
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// True when no prime is known yet
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// The prime log backing this store
    pub fn log(&self) -> &PrimeLog {
        &self.log
    }
}
