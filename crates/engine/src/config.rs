//! Data directory configuration
//!
//! Read from `goldbach.toml` in the data directory when present:
//!
//! ```toml
//! primes_file = "primes.txt"
//! pairs_file = "goldbach.txt"
//! durability = "buffered"   # or "always"
//! ```
//!
//! Missing keys take their defaults; a missing file means all defaults.

use crate::database::LOCK_FILE_NAME;
use goldbach_core::{GoldbachError, GoldbachResult};
use goldbach_durability::DurabilityMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Name of the configuration file inside a data directory
pub const CONFIG_FILE_NAME: &str = "goldbach.toml";

/// Default prime log file name
pub const DEFAULT_PRIMES_FILE: &str = "primes.txt";

/// Default pair log file name
pub const DEFAULT_PAIRS_FILE: &str = "goldbach.txt";

/// Configuration for one data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GoldbachConfig {
    /// Prime log file name, relative to the data directory
    pub primes_file: String,
    /// Pair log file name, relative to the data directory
    pub pairs_file: String,
    /// When appended records are forced to disk
    pub durability: DurabilityMode,
}

impl Default for GoldbachConfig {
    fn default() -> Self {
        Self {
            primes_file: DEFAULT_PRIMES_FILE.to_string(),
            pairs_file: DEFAULT_PAIRS_FILE.to_string(),
            durability: DurabilityMode::default(),
        }
    }
}

impl GoldbachConfig {
    /// Set the durability mode
    pub fn with_durability(mut self, mode: DurabilityMode) -> Self {
        self.durability = mode;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> GoldbachResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| GoldbachError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> GoldbachResult<String> {
        toml::to_string_pretty(self).map_err(|e| GoldbachError::config(e.to_string()))
    }

    /// Load `goldbach.toml` from `dir`, or defaults if it does not exist
    pub fn load(dir: &Path) -> GoldbachResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        match fs::read_to_string(&path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(GoldbachError::io(path, e)),
        }
    }

    /// Write `goldbach.toml` into `dir`
    pub fn save(&self, dir: &Path) -> GoldbachResult<()> {
        self.validate()?;
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, self.to_toml_string()?).map_err(|e| GoldbachError::io(path, e))
    }

    /// Check that both file names are plain, distinct, and do not collide
    /// with the directory's own bookkeeping files
    pub fn validate(&self) -> GoldbachResult<()> {
        validate_file_name("primes_file", &self.primes_file)?;
        validate_file_name("pairs_file", &self.pairs_file)?;
        if self.primes_file == self.pairs_file {
            return Err(GoldbachError::config(format!(
                "primes_file and pairs_file must differ (both '{}')",
                self.primes_file
            )));
        }
        Ok(())
    }

    /// Full path of the prime log
    pub fn primes_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.primes_file)
    }

    /// Full path of the pair log
    pub fn pairs_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.pairs_file)
    }
}

fn validate_file_name(field: &str, name: &str) -> GoldbachResult<()> {
    let mut components = Path::new(name).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !plain {
        return Err(GoldbachError::config(format!(
            "{} must be a plain file name, got '{}'",
            field, name
        )));
    }
    if name == CONFIG_FILE_NAME || name == LOCK_FILE_NAME {
        return Err(GoldbachError::config(format!(
            "{} may not be '{}', which is reserved",
            field, name
        )));
    }
    Ok(())
}
