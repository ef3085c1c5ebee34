//! Lenient line scanning and parsing
//!
//! Lines are split on `\n` as raw bytes so a stray non-UTF-8 line is
//! skipped like any other malformed line instead of failing the read.

use goldbach_core::{GoldbachError, GoldbachRecord, GoldbachResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Counters from one pass over a file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines the parser accepted
    pub parsed: u64,
    /// Non-blank lines the parser rejected
    pub ignored: u64,
}

/// Feed every non-blank line of `path` to `visit`
///
/// `visit` returns whether it accepted the line. A missing file reads as empty.
pub fn scan_lines<F>(path: &Path, mut visit: F) -> GoldbachResult<ScanStats>
where
    F: FnMut(&str) -> bool,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ScanStats::default()),
        Err(e) => return Err(GoldbachError::io(path, e)),
    };

    let mut stats = ScanStats::default();
    for chunk in BufReader::new(file).split(b'\n') {
        let bytes = chunk.map_err(|e| GoldbachError::io(path, e))?;
        let accepted = match std::str::from_utf8(&bytes) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => visit(line),
            Err(_) => false,
        };
        if accepted {
            stats.parsed += 1;
        } else {
            stats.ignored += 1;
        }
    }
    Ok(stats)
}

/// Parse a prime log line: a single integer
pub fn parse_prime(line: &str) -> Option<u64> {
    line.trim().parse().ok()
}

/// Parse the first comma-separated field of a pair log line
pub fn parse_even_field(line: &str) -> Option<u64> {
    line.split(',').next()?.trim().parse().ok()
}

/// Parse a full `even,prime_a,prime_b` line
pub fn parse_record(line: &str) -> Option<GoldbachRecord> {
    let mut fields = line.split(',').map(|f| f.trim().parse::<u64>());
    let even = fields.next()?.ok()?;
    let prime_a = fields.next()?.ok()?;
    let prime_b = fields.next()?.ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(GoldbachRecord::new(even, prime_a, prime_b))
}
