//! Text and JSON rendering of command results

use anyhow::Result;
use goldbach_engine::{DatabaseInfo, EnumerationReport};
use serde::Serialize;
use std::fmt;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    /// Print `value` to stdout
    pub fn print<T: Serialize + fmt::Display>(&self, value: &T) -> Result<()> {
        match self {
            Format::Text => println!("{}", value),
            Format::Json => println!("{}", serde_json::to_string_pretty(value)?),
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct PrimesOutput {
    pub known_bound: u64,
    pub new_primes: usize,
    pub total_primes: usize,
    pub elapsed_ms: u128,
}

impl fmt::Display for PrimesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "primes known up to {}: {} total, {} new ({} ms)",
            self.known_bound, self.total_primes, self.new_primes, self.elapsed_ms
        )
    }
}

#[derive(Debug, Serialize)]
pub struct PairsOutput {
    pub up_to: u64,
    #[serde(flatten)]
    pub report: EnumerationReport,
    pub elapsed_ms: u128,
}

impl fmt::Display for PairsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "goldbach pairs up to {}: {} evens scanned, {} skipped, {} records written ({} ms)",
            self.up_to,
            self.report.evens_scanned,
            self.report.evens_skipped,
            self.report.records_written,
            self.elapsed_ms
        )
    }
}

#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub up_to: u64,
    pub new_primes: usize,
    pub total_primes: usize,
    #[serde(flatten)]
    pub report: EnumerationReport,
    pub primes_ms: u128,
    pub pairs_ms: u128,
}

impl fmt::Display for RunOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "primes up to {}: {} total, {} new ({} ms)",
            self.up_to, self.total_primes, self.new_primes, self.primes_ms
        )?;
        write!(
            f,
            "goldbach pairs up to {}: {} evens scanned, {} skipped, {} records written ({} ms)",
            self.up_to,
            self.report.evens_scanned,
            self.report.evens_skipped,
            self.report.records_written,
            self.pairs_ms
        )
    }
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub value: u64,
    pub is_prime: bool,
}

impl fmt::Display for CheckOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_prime {
            write!(f, "{} is prime", self.value)
        } else {
            write!(f, "{} is not prime", self.value)
        }
    }
}

/// Text view over the engine's info summary
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct InfoView<'a>(pub &'a DatabaseInfo);

impl fmt::Display for InfoView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "known bound: {}\nprimes: {}\ncompleted evens: {}",
            self.0.known_bound, self.0.prime_count, self.0.completed_evens
        )
    }
}
