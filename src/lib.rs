//! Goldbach: incremental prime sieve and Goldbach decomposition engine
//!
//! Computes primes up to a bound and every prime pair summing to each even
//! number up to a bound. Results are persisted to append-only text files in
//! a data directory, so a repeated run does no redundant work.
//!
//! # Quick Start
//!
//! ```no_run
//! use goldbach::Database;
//!
//! let mut db = Database::open("./goldbach-data")?;
//! db.ensure_primes_up_to(100)?;
//! let report = db.enumerate_goldbach_up_to(100)?;
//! println!("{} new records", report.records_written);
//! # Ok::<(), goldbach::GoldbachError>(())
//! ```

#![warn(missing_docs)]

pub mod types;

pub use types::*;
