//! Sieve of Eratosthenes

use goldbach_core::{GoldbachError, GoldbachResult};

/// Sieve `[0, n]` from scratch
///
/// Returns a table of length `n + 1` where `table[x]` is true iff `x` is
/// prime. Marking starts at `p * p` for every `p <= floor(sqrt(n))`, giving
/// O(n log log n) work.
///
/// # Errors
///
/// `BoundTooLarge` if `n + 1` does not fit in `usize`.
pub fn sieve(n: u64) -> GoldbachResult<Vec<bool>> {
    let len = table_len(n)?;
    let mut table = vec![true; len];
    table[0] = false;
    if len > 1 {
        table[1] = false;
    }

    // n + 1 fits in usize, so the root does too
    let limit = integer_sqrt(n) as usize;
    for p in 2..=limit {
        if table[p] {
            for multiple in (p * p..len).step_by(p) {
                table[multiple] = false;
            }
        }
    }
    Ok(table)
}

/// Number of slots needed to index `[0, bound]`
pub(crate) fn table_len(bound: u64) -> GoldbachResult<usize> {
    usize::try_from(bound)
        .ok()
        .and_then(|b| b.checked_add(1))
        .ok_or(GoldbachError::BoundTooLarge { bound })
}

/// floor(sqrt(n)), exact for every u64
pub(crate) fn integer_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= n) {
        root += 1;
    }
    root
}
