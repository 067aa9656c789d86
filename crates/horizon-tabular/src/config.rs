//! Dataset configuration for the example model.
//!
//! The configuration is read from TOML. Every field is optional; missing
//! fields take the defaults below.
//!
//! ```toml
//! max_rows = 50000     # generated row count is uniform in [0, max_rows)
//! max_bar_len = 5      # "Bar" is 1..=max_bar_len asterisks
//! baz_scale = 1000.0   # "Baz" is uniform in [0, baz_scale)
//! seed = 42            # omit for a fresh random dataset each run
//! image_dir = "img"    # where open.png and x.ico live
//! ```

use std::path::{Path, PathBuf};

use horizon_tabular_core::logging::targets;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};

/// Settings for generating the example dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Exclusive upper bound of the generated row count.
    pub max_rows: usize,
    /// Maximum length of the "Bar" string.
    pub max_bar_len: usize,
    /// Exclusive upper bound of "Baz".
    pub baz_scale: f64,
    /// Seed for reproducible datasets.
    pub seed: Option<u64>,
    /// Directory containing the row images.
    pub image_dir: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            max_rows: 50_000,
            max_bar_len: 5,
            baz_scale: 1000.0,
            seed: None,
            image_dir: PathBuf::from("img"),
        }
    }
}

impl DatasetConfig {
    /// Loads and validates a configuration from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::config(path, e))?;
        let config = Self::parse(&content, path)?;
        debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded dataset config");
        Ok(config)
    }

    /// Parses and validates a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<string>"))
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ModelError::config_parse("<string>", e.to_string()))
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the row count bound.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Checks the invariants the generator relies on.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_rows == 0 {
            return Err("max_rows must be at least 1".into());
        }
        if self.max_bar_len == 0 {
            return Err("max_bar_len must be at least 1".into());
        }
        if !(self.baz_scale.is_finite() && self.baz_scale > 0.0) {
            return Err(format!(
                "baz_scale must be finite and positive, got {}",
                self.baz_scale
            ));
        }
        Ok(())
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ModelError::config_parse(path, e.to_string()))?;
        config
            .validate()
            .map_err(|message| ModelError::config_parse(path, message))?;
        Ok(config)
    }
}
