//! Prime sieving and Goldbach enumeration engine
//!
//! - `sieve`: full sieve of Eratosthenes over `[0, n]`
//! - `prime_store`: `PrimeStore`, the growing, persisted set of known primes
//! - `enumerator`: `GoldbachEnumerator`, streaming pair discovery with
//!   incremental skip of already-recorded even numbers
//! - `config`: `GoldbachConfig` (`goldbach.toml`)
//! - `database`: `Database`, the single owning handle over a data directory
//!
//! Everything is single-threaded and synchronous. The `Database` handle
//! holds an exclusive lock on its directory for its whole lifetime.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod database;
pub mod enumerator;
pub mod prime_store;
pub mod sieve;

pub use config::{GoldbachConfig, CONFIG_FILE_NAME};
pub use database::{Database, DatabaseInfo, RunReport, LOCK_FILE_NAME};
pub use enumerator::{EnumerationReport, GoldbachEnumerator};
pub use prime_store::PrimeStore;
pub use sieve::sieve;

pub use goldbach_durability::DurabilityMode;
