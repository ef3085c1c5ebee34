//! Shared helpers

use goldbach::{Database, GoldbachRecord};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn fresh_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(temp_dir.path()).unwrap();
    (temp_dir, db)
}

pub fn is_prime_reference(x: u64) -> bool {
    if x < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= x {
        if x % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

pub fn all_pairs(even: u64) -> Vec<GoldbachRecord> {
    (2..=even / 2)
        .filter(|&p| is_prime_reference(p) && is_prime_reference(even - p))
        .map(|p| GoldbachRecord::new(even, p, even - p))
        .collect()
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}
