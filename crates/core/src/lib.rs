//! Core types for the Goldbach engine
//!
//! This crate defines the vocabulary shared by every other crate:
//! - `GoldbachError` / `GoldbachResult`: the single error type
//! - `GoldbachRecord`: one verified decomposition `even = prime_a + prime_b`
//!
//! It has no I/O and no engine logic.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{GoldbachError, GoldbachResult};
pub use types::{GoldbachRecord, MIN_GOLDBACH_EVEN};
