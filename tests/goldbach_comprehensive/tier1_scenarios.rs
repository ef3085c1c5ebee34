//! Tier 1: Concrete scenarios

use crate::test_utils::*;
use goldbach::{GoldbachError, GoldbachRecord};

#[test]
fn primes_up_to_ten() {
    let (_dir, mut db) = fresh_db();

    db.ensure_primes_up_to(10).unwrap();

    assert_eq!(db.primes(), &[2, 3, 5, 7]);
}

#[test]
fn pairs_up_to_ten_in_order() {
    let (dir, mut db) = fresh_db();
    db.ensure_primes_up_to(10).unwrap();

    db.enumerate_goldbach_up_to(10).unwrap();

    assert_eq!(
        db.records().unwrap(),
        vec![
            GoldbachRecord::new(4, 2, 2),
            GoldbachRecord::new(6, 3, 3),
            GoldbachRecord::new(8, 3, 5),
            GoldbachRecord::new(10, 3, 7),
            GoldbachRecord::new(10, 5, 5),
        ]
    );
    assert_eq!(
        read(dir.path().join("goldbach.txt")),
        "4,2,2\n6,3,3\n8,3,5\n10,3,7\n10,5,5\n"
    );
}

#[test]
fn smallest_range_is_four() {
    let (_dir, mut db) = fresh_db();

    db.enumerate_goldbach_up_to(4).unwrap();

    assert_eq!(db.records().unwrap(), vec![GoldbachRecord::new(4, 2, 2)]);
}

#[test]
fn range_below_four_is_rejected() {
    let (dir, mut db) = fresh_db();

    for up_to in 0..4 {
        let err = db.enumerate_goldbach_up_to(up_to).unwrap_err();
        assert!(matches!(err, GoldbachError::InvalidRange { .. }));
    }
    assert_eq!(read(dir.path().join("goldbach.txt")), "");
    assert_eq!(read(dir.path().join("primes.txt")), "");
}

#[test]
fn primality_past_bound_is_out_of_range() {
    let (_dir, mut db) = fresh_db();
    db.ensure_primes_up_to(100).unwrap();

    assert!(db.is_prime(97).unwrap());
    let err = db.is_prime(101).unwrap_err();
    assert!(err.is_programming_error());
}

#[test]
fn hundred_has_six_decompositions() {
    let (_dir, mut db) = fresh_db();

    db.enumerate_goldbach_up_to(100).unwrap();

    let hundred: Vec<_> = db
        .records()
        .unwrap()
        .into_iter()
        .filter(|r| r.even == 100)
        .map(|r| (r.prime_a, r.prime_b))
        .collect();
    assert_eq!(
        hundred,
        vec![(3, 97), (11, 89), (17, 83), (29, 71), (41, 59), (47, 53)]
    );
}
