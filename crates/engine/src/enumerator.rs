//! Goldbach Enumerator
//!
//! For every even number in `[4, up_to]` not yet present in the pair log,
//! finds every prime pair `(p, q)` with `p <= q` and `p + q == even`, and
//! streams each record straight to the log.
//!
//! # Incremental skip
//!
//! An even number counts as done if the log holds *any* record for it. A
//! run interrupted halfway through an even number's pairs therefore leaves
//! that number under-reported on later runs. This coarse policy is kept as-is.
//!
//! # Cursor
//!
//! `half = even / 2` never decreases as `even` grows, so the index of the
//! first prime above `half` is tracked with one cursor that only moves
//! forward across the whole call.

use crate::prime_store::PrimeStore;
use goldbach_core::{GoldbachError, GoldbachRecord, GoldbachResult, MIN_GOLDBACH_EVEN};
use goldbach_durability::PairLog;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Counters for one enumeration call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationReport {
    /// Even numbers in `[4, up_to]`
    pub evens_scanned: u64,
    /// Even numbers skipped because the log already had a record for them
    pub evens_skipped: u64,
    /// Records appended to the log
    pub records_written: u64,
}

impl EnumerationReport {
    /// Even numbers whose pairs were computed in this call
    pub fn evens_processed(&self) -> u64 {
        self.evens_scanned - self.evens_skipped
    }
}

/// Streams Goldbach decompositions into a pair log
#[derive(Debug, Clone)]
pub struct GoldbachEnumerator {
    log: PairLog,
}

impl GoldbachEnumerator {
    /// Create an enumerator writing to `log`
    pub fn new(log: PairLog) -> Self {
        Self { log }
    }

    /// The pair log this enumerator appends to
    pub fn log(&self) -> &PairLog {
        &self.log
    }

    /// Enumerate every decomposition of every even number in `[4, up_to]`
    ///
    /// Grows `store` to cover `up_to` first, then reads the Completed-Set
    /// from the log and appends records for the remaining even numbers, in
    /// ascending order of `even` and then of the smaller prime.
    ///
    /// # Errors
    ///
    /// `InvalidRange` if `up_to < 4`, before any work is done. I/O errors
    /// propagate; records already written stay in the log.
    pub fn enumerate_up_to(
        &self,
        store: &mut PrimeStore,
        up_to: u64,
    ) -> GoldbachResult<EnumerationReport> {
        if up_to < MIN_GOLDBACH_EVEN {
            return Err(GoldbachError::InvalidRange { up_to });
        }

        store.ensure_primes_up_to(up_to)?;
        let store: &PrimeStore = store;

        let completed = self.log.completed_evens()?;
        let mut appender = self.log.appender()?;

        let primes = store.primes();
        let known_bound = store.known_bound();
        let mut cursor = 0usize;
        let mut report = EnumerationReport::default();

        for even in (MIN_GOLDBACH_EVEN..=up_to).step_by(2) {
            report.evens_scanned += 1;
            if completed.contains(&even) {
                report.evens_skipped += 1;
                continue;
            }

            let half = even / 2;
            while cursor < primes.len() && primes[cursor] <= half {
                cursor += 1;
            }

            for &p in &primes[..cursor] {
                let q = even - p;
                if q <= known_bound && store.is_prime(q)? {
                    appender.append(&GoldbachRecord::new(even, p, q))?;
                }
            }
            appender.end_even()?;
        }

        report.records_written = appender.finish()?;

        debug!(completed_before = completed.len(), "Completed-Set size");
        info!(
            up_to,
            evens_scanned = report.evens_scanned,
            evens_skipped = report.evens_skipped,
            records_written = report.records_written,
            "Goldbach enumeration finished"
        );
        Ok(report)
    }
}
