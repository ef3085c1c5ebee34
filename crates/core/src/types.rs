//! Record types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest even number with a Goldbach decomposition (4 = 2 + 2)
pub const MIN_GOLDBACH_EVEN: u64 = 4;

/// One verified Goldbach decomposition
///
/// Invariants (upheld by the enumerator, not re-checked here):
/// `prime_a + prime_b == even`, `prime_a <= prime_b`, both prime, `even >= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GoldbachRecord {
    /// The even number being decomposed
    pub even: u64,
    /// The smaller prime
    pub prime_a: u64,
    /// The larger (or equal) prime
    pub prime_b: u64,
}

impl GoldbachRecord {
    /// Create a record
    pub fn new(even: u64, prime_a: u64, prime_b: u64) -> Self {
        Self {
            even,
            prime_a,
            prime_b,
        }
    }

    /// Check the arithmetic shape of the record
    ///
    /// Primality of the two parts is not checked.
    pub fn is_well_formed(&self) -> bool {
        self.even >= MIN_GOLDBACH_EVEN
            && self.even % 2 == 0
            && self.prime_a <= self.prime_b
            && self.prime_a.checked_add(self.prime_b) == Some(self.even)
    }
}

/// Renders the persisted line form `even,prime_a,prime_b`
impl fmt::Display for GoldbachRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.even, self.prime_a, self.prime_b)
    }
}
