//! Configuration for lostfound
//!
//! Stored as TOML, by default `lostfound.toml` next to the data. A missing
//! file means defaults.

pub mod types;

use std::fs;
use std::path::Path;

use crate::duplicates::ClusteringConfig;
use crate::error::{LostFoundError, Result};

pub use types::{AppConfig, DuplicatesConfig, SummaryConfig, TaggingConfig, WatchConfig};

/// Default configuration file name
pub const CONFIG_FILE: &str = "lostfound.toml";

/// Environment variable naming an alternative configuration file
pub const CONFIG_ENV_VAR: &str = "LOSTFOUND_CONFIG";

impl AppConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LostFoundError::failed("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Clustering parameters from the `[duplicates]` section
    pub fn clustering(&self) -> ClusteringConfig {
        ClusteringConfig::new(self.duplicates.threshold)
    }
}
