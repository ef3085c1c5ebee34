//! Line-oriented persistence for the Goldbach engine
//!
//! Two append-only text files back every run:
//! - prime log: one prime per line, ascending
//! - pair log: one `even,prime_a,prime_b` record per line
//!
//! Existing lines are never rewritten. Readers are lenient: blank or
//! malformed lines are skipped, never reported as errors.
//!
//! - `mode`: `DurabilityMode` (when appended lines reach disk)
//! - `lines`: shared lenient line scanner and line parsers
//! - `prime_log`: `PrimeLog`
//! - `pair_log`: `PairLog` and the streaming `PairAppender`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lines;
pub mod mode;
pub mod pair_log;
pub mod prime_log;

pub use lines::ScanStats;
pub use mode::DurabilityMode;
pub use pair_log::{PairAppender, PairLog};
pub use prime_log::PrimeLog;

use goldbach_core::{GoldbachError, GoldbachResult};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Create `path` (and its parent directory) if missing, leaving existing
/// content untouched.
pub(crate) fn bootstrap_file(path: &Path) -> GoldbachResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| GoldbachError::io(parent, e))?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| GoldbachError::io(path, e))?;
    Ok(())
}
