//! Durability mode for appended records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// When appended lines are forced to disk
///
/// Both modes flush and fsync at the end of every call; they differ only
/// in what an interrupted call leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurabilityMode {
    /// Buffer writes, flush + fsync once when the writer finishes (default)
    #[default]
    Buffered,
    /// Flush + fsync after every completed even number
    Always,
}

impl DurabilityMode {
    /// Whether each completed even number must be synced before moving on
    pub fn syncs_per_even(&self) -> bool {
        matches!(self, DurabilityMode::Always)
    }
}

impl fmt::Display for DurabilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurabilityMode::Buffered => f.write_str("buffered"),
            DurabilityMode::Always => f.write_str("always"),
        }
    }
}

impl FromStr for DurabilityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buffered" => Ok(DurabilityMode::Buffered),
            "always" => Ok(DurabilityMode::Always),
            other => Err(format!(
                "unknown durability mode '{}', expected 'buffered' or 'always'",
                other
            )),
        }
    }
}
