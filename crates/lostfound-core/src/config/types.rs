//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::duplicates::DEFAULT_THRESHOLD;
use crate::tagging::DEFAULT_CONFIDENCE_THRESHOLD;

/// Application configuration, one section per analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub duplicates: DuplicatesConfig,

    #[serde(default)]
    pub tagging: TaggingConfig,

    #[serde(default)]
    pub summary: SummaryConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

/// Duplicate detection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicatesConfig {
    /// Minimum pair similarity for grouping (default 0.7)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Newest rows fetched per table (default 100)
    #[serde(default = "default_feed_limit")]
    pub feed_limit: usize,
}

/// Auto-categorization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggingConfig {
    /// Minimum confidence for counting or applying a prediction (default 0.7)
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    #[serde(default = "default_feed_limit")]
    pub feed_limit: usize,
}

/// Executive summary settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Newest rows fetched per table (default 200)
    #[serde(default = "default_summary_feed_limit")]
    pub feed_limit: usize,
}

/// Watch loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Poll interval in milliseconds (default 2000)
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_feed_limit() -> usize {
    100
}

fn default_confidence_threshold() -> f64 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

fn default_summary_feed_limit() -> usize {
    200
}

fn default_interval_ms() -> u64 {
    2000
}

impl Default for DuplicatesConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            feed_limit: default_feed_limit(),
        }
    }
}

impl Default for TaggingConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            feed_limit: default_feed_limit(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            feed_limit: default_summary_feed_limit(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}
