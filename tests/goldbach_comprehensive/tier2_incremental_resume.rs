//! Tier 2: Incremental resume across reopen

use crate::test_utils::*;
use goldbach::{Database, GoldbachRecord};
use std::fs;
use tempfile::TempDir;

#[test]
fn second_invocation_does_no_work() {
    let temp_dir = TempDir::new().unwrap();
    {
        let mut db = Database::open(temp_dir.path()).unwrap();
        db.ensure_primes_up_to(200).unwrap();
        db.enumerate_goldbach_up_to(200).unwrap();
    }
    let primes_before = read(temp_dir.path().join("primes.txt"));
    let pairs_before = read(temp_dir.path().join("goldbach.txt"));

    let mut db = Database::open(temp_dir.path()).unwrap();
    // reloaded bound is 199, the last persisted prime
    assert_eq!(db.ensure_primes_up_to(200).unwrap(), 0);
    let report = db.enumerate_goldbach_up_to(200).unwrap();

    assert_eq!(report.records_written, 0);
    assert_eq!(report.evens_skipped, 99);
    assert_eq!(read(temp_dir.path().join("primes.txt")), primes_before);
    assert_eq!(read(temp_dir.path().join("goldbach.txt")), pairs_before);
}

#[test]
fn prerecorded_even_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("goldbach.txt"), "6,3,3\n").unwrap();
    let mut db = Database::open(temp_dir.path()).unwrap();

    db.ensure_primes_up_to(10).unwrap();
    db.enumerate_goldbach_up_to(10).unwrap();
    db.ensure_primes_up_to(10).unwrap();

    let evens: Vec<u64> = db.records().unwrap().iter().map(|r| r.even).collect();
    assert_eq!(evens, vec![6, 4, 8, 10, 10]);
    assert_eq!(read(temp_dir.path().join("primes.txt")), "2\n3\n5\n7\n");
}

#[test]
fn interrupted_even_stays_incomplete() {
    let temp_dir = TempDir::new().unwrap();
    // a crash after the first of 22's three pairs: 3+19, 5+17, 11+11
    fs::write(temp_dir.path().join("goldbach.txt"), "22,3,19\n").unwrap();
    let mut db = Database::open(temp_dir.path()).unwrap();

    db.enumerate_goldbach_up_to(22).unwrap();

    let twenty_two: Vec<_> = db
        .records()
        .unwrap()
        .into_iter()
        .filter(|r| r.even == 22)
        .collect();
    assert_eq!(twenty_two, vec![GoldbachRecord::new(22, 3, 19)]);
}

#[test]
fn growing_the_range_resumes_where_it_stopped() {
    let temp_dir = TempDir::new().unwrap();
    {
        let mut db = Database::open(temp_dir.path()).unwrap();
        db.run(50).unwrap();
    }

    let mut db = Database::open(temp_dir.path()).unwrap();
    let report = db.run(80).unwrap();

    assert_eq!(report.enumeration.evens_skipped, 24);
    assert_eq!(report.enumeration.evens_processed(), 15);

    let records = db.records().unwrap();
    let mut expected = Vec::new();
    for even in (4..=80).step_by(2) {
        expected.extend(all_pairs(even));
    }
    assert_eq!(records, expected);
}

#[test]
fn prime_log_grows_without_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    for bound in [10, 5, 30, 30, 20, 60] {
        let mut db = Database::open(temp_dir.path()).unwrap();
        db.ensure_primes_up_to(bound).unwrap();
    }

    let lines: Vec<u64> = read(temp_dir.path().join("primes.txt"))
        .lines()
        .map(|l| l.parse().unwrap())
        .collect();
    let expected: Vec<u64> = (0..=60).filter(|&x| is_prime_reference(x)).collect();
    assert_eq!(lines, expected);
}
