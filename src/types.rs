//! Public types for the Goldbach API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Handle and reports
// ============================================================================

pub use goldbach_engine::{Database, DatabaseInfo, EnumerationReport, RunReport};

// ============================================================================
// Configuration
// ============================================================================

pub use goldbach_engine::{DurabilityMode, GoldbachConfig, CONFIG_FILE_NAME, LOCK_FILE_NAME};

// ============================================================================
// Records and errors
// ============================================================================

pub use goldbach_core::{GoldbachError, GoldbachRecord, GoldbachResult, MIN_GOLDBACH_EVEN};

// ============================================================================
// Lower-level building blocks
// ============================================================================

pub use goldbach_durability::{PairLog, PrimeLog};
pub use goldbach_engine::{sieve, GoldbachEnumerator, PrimeStore};
