//! Goldbach Comprehensive Test Suite
//!
//! End-to-end tests through the public `goldbach` facade.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Concrete scenarios (known primes and decompositions)
//! - **Tier 2**: Incremental resume across reopen
//! - **Tier 3**: Properties against a trial-division reference
//! - **Tier 4**: Persistence behavior (durability modes, locking, leniency)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test goldbach_comprehensive
//! ```

mod test_utils;

mod tier1_scenarios;
mod tier2_incremental_resume;
mod tier3_properties;
mod tier4_persistence;
