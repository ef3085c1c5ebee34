//! Tier 3: Properties against a trial-division reference

use crate::test_utils::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn primality_matches_reference(n in 0u64..3000) {
        let (_dir, mut db) = fresh_db();
        db.ensure_primes_up_to(n).unwrap();

        for x in 0..=n {
            prop_assert_eq!(db.is_prime(x).unwrap(), is_prime_reference(x));
        }
    }

    #[test]
    fn smaller_request_never_shrinks(n1 in 2u64..1000, n2 in 0u64..1000) {
        let (_dir, mut db) = fresh_db();
        db.ensure_primes_up_to(n1).unwrap();
        let bound = db.known_bound();
        let primes = db.primes().to_vec();

        db.ensure_primes_up_to(n2.min(n1)).unwrap();

        prop_assert_eq!(db.known_bound(), bound);
        prop_assert_eq!(db.primes(), primes.as_slice());
    }

    #[test]
    fn every_even_fully_decomposed(up_to in 4u64..600) {
        let (_dir, mut db) = fresh_db();
        db.enumerate_goldbach_up_to(up_to).unwrap();
        let records = db.records().unwrap();

        for r in &records {
            prop_assert!(r.is_well_formed());
            prop_assert!(is_prime_reference(r.prime_a) && is_prime_reference(r.prime_b));
        }
        let mut expected = Vec::new();
        for even in (4..=up_to).step_by(2) {
            expected.extend(all_pairs(even));
        }
        prop_assert_eq!(records, expected);
    }
}
