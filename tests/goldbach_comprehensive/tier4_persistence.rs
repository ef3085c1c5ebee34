//! Tier 4: Persistence behavior

use crate::test_utils::*;
use goldbach::{Database, DurabilityMode, GoldbachConfig, GoldbachError};
use std::fs;
use tempfile::TempDir;

#[test]
fn always_mode_produces_same_records() {
    let buffered_dir = TempDir::new().unwrap();
    let always_dir = TempDir::new().unwrap();

    Database::open(buffered_dir.path()).unwrap().run(120).unwrap();
    Database::open_with_config(
        always_dir.path(),
        GoldbachConfig::default().with_durability(DurabilityMode::Always),
    )
    .unwrap()
    .run(120)
    .unwrap();

    assert_eq!(
        read(buffered_dir.path().join("goldbach.txt")),
        read(always_dir.path().join("goldbach.txt"))
    );
}

#[test]
fn concurrent_handle_is_refused() {
    let (dir, _db) = fresh_db();

    let err = Database::open(dir.path()).unwrap_err();

    assert!(matches!(err, GoldbachError::Locked { .. }));
}

#[test]
fn malformed_lines_are_tolerated() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("primes.txt"), "2\n\njunk\n3\n5\n7\n").unwrap();
    fs::write(
        temp_dir.path().join("goldbach.txt"),
        "4,2,2\nnot,a,record\n\n8,3,5\n",
    )
    .unwrap();

    let mut db = Database::open(temp_dir.path()).unwrap();
    assert_eq!(db.primes(), &[2, 3, 5, 7]);

    let report = db.enumerate_goldbach_up_to(10).unwrap();

    assert_eq!(report.evens_skipped, 2);
    assert_eq!(report.records_written, 3);
}

#[test]
fn custom_file_names_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = GoldbachConfig {
        primes_file: "p.log".into(),
        pairs_file: "pairs.csv".into(),
        ..GoldbachConfig::default()
    };
    config.save(temp_dir.path()).unwrap();

    Database::open(temp_dir.path()).unwrap().run(8).unwrap();

    assert_eq!(read(temp_dir.path().join("p.log")), "2\n3\n5\n7\n");
    assert_eq!(read(temp_dir.path().join("pairs.csv")), "4,2,2\n6,3,3\n8,3,5\n");
    assert!(!temp_dir.path().join("primes.txt").exists());
}

#[test]
fn info_reflects_persisted_state() {
    let (_dir, mut db) = fresh_db();
    db.run(30).unwrap();

    let info = db.info().unwrap();

    assert_eq!(info.known_bound, 30);
    assert_eq!(info.prime_count, 10);
    assert_eq!(info.completed_evens, 14);
}
