//! Recompute-on-change driver for duplicate detection
//!
//! The monitor owns a [`ReportSource`], re-runs clustering when the source
//! reports a new [`ChangeToken`] and keeps only the latest result.

use crate::duplicates::{ClusteringConfig, DuplicateReport};
use crate::error::Result;
use crate::feed::{ChangeToken, ReportSource};

pub struct DuplicateMonitor<S: ReportSource> {
    source: S,
    config: ClusteringConfig,
    last_version: Option<ChangeToken>,
    latest: Option<DuplicateReport>,
}

impl<S: ReportSource> DuplicateMonitor<S> {
    pub fn new(source: S, config: ClusteringConfig) -> Self {
        Self {
            source,
            config,
            last_version: None,
            latest: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Result of the most recent run, if any
    pub fn latest(&self) -> Option<&DuplicateReport> {
        self.latest.as_ref()
    }

    /// Fetch and re-cluster unconditionally
    pub fn refresh(&mut self) -> Result<&DuplicateReport> {
        let version = self.source.version()?;
        let reports = self.source.fetch()?;
        let report = DuplicateReport::detect(&reports, &self.config);
        tracing::debug!(
            items = report.stats.total_items,
            groups = report.stats.duplicate_groups,
            "duplicate report refreshed"
        );
        self.last_version = version;
        Ok(self.latest.insert(report))
    }

    /// Re-cluster only when the source changed since the last run.
    ///
    /// Returns whether a new result was computed. A source that cannot report
    /// a version is refreshed on every poll.
    pub fn poll(&mut self) -> Result<bool> {
        let version = self.source.version()?;
        let unchanged =
            self.latest.is_some() && version.is_some() && version == self.last_version;
        if unchanged {
            return Ok(false);
        }
        self.refresh()?;
        Ok(true)
    }
}
