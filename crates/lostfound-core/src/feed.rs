//! Report feed: JSON snapshots of the data store and the source abstraction
//! the watch loop polls
//!
//! A snapshot mirrors the store's tables:
//!
//! ```json
//! { "lost_items": [...], "found_items": [...], "profiles": [...] }
//! ```
//!
//! Every table is optional.

use std::cell::{Cell, RefCell};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use serde::Deserialize;

use crate::error::{LostFoundError, Result};
use crate::report::{Report, ReportKind};

/// Parsed contents of a snapshot file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    lost_items: Vec<Report>,
    #[serde(default)]
    found_items: Vec<Report>,
    #[serde(default)]
    profiles: Vec<serde_json::Value>,
}

impl Snapshot {
    /// Read and parse a snapshot file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LostFoundError::SnapshotNotFound {
                path: path.to_path_buf(),
            },
            _ => LostFoundError::Io(e),
        })?;
        Self::parse(&content).map_err(|e| LostFoundError::invalid_snapshot(path, e))
    }

    /// Parse snapshot JSON, tagging each row with the table it came from
    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        let mut snapshot: Snapshot = serde_json::from_str(content)?;
        for report in &mut snapshot.lost_items {
            report.kind = ReportKind::Lost;
        }
        for report in &mut snapshot.found_items {
            report.kind = ReportKind::Found;
        }
        tracing::debug!(
            lost = snapshot.lost_items.len(),
            found = snapshot.found_items.len(),
            profiles = snapshot.profiles.len(),
            "snapshot parsed"
        );
        Ok(snapshot)
    }

    /// Newest `limit` rows of one table
    pub fn table(&self, kind: ReportKind, limit: Option<usize>) -> Vec<Report> {
        let rows = match kind {
            ReportKind::Lost => &self.lost_items,
            ReportKind::Found => &self.found_items,
        };
        newest_first(rows, limit)
    }

    /// Newest `limit` lost rows followed by the newest `limit` found rows
    pub fn reports(&self, limit: Option<usize>) -> Vec<Report> {
        let mut reports = self.table(ReportKind::Lost, limit);
        reports.extend(self.table(ReportKind::Found, limit));
        reports
    }

    /// Number of registered user profiles
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }
}

/// Sort by `created_at` descending; rows without a timestamp go last
fn newest_first(rows: &[Report], limit: Option<usize>) -> Vec<Report> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}

/// Opaque marker that changes whenever the underlying data changes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangeToken(String);

impl ChangeToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

/// Anything that can produce the current report list
pub trait ReportSource {
    /// Current reports, lost before found
    fn fetch(&self) -> Result<Vec<Report>>;

    /// Change marker, `None` when the source cannot tell
    fn version(&self) -> Result<Option<ChangeToken>>;
}

/// A snapshot file on disk
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
    limit: Option<usize>,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            limit: None,
        }
    }

    /// Keep at most `limit` newest rows per table
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSource for SnapshotFile {
    fn fetch(&self) -> Result<Vec<Report>> {
        Ok(Snapshot::load(&self.path)?.reports(self.limit))
    }

    /// Modification time and length of the file; `None` while it is missing
    fn version(&self) -> Result<Option<ChangeToken>> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let modified = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        Ok(Some(ChangeToken::new(format!(
            "{modified}:{}",
            metadata.len()
        ))))
    }
}

/// In-memory source with an explicit revision counter
#[derive(Debug, Default)]
pub struct MemorySource {
    reports: RefCell<Vec<Report>>,
    revision: Cell<u64>,
}

impl MemorySource {
    pub fn new(reports: Vec<Report>) -> Self {
        Self {
            reports: RefCell::new(reports),
            revision: Cell::new(0),
        }
    }

    /// Swap in a new report list and bump the revision
    pub fn replace(&self, reports: Vec<Report>) {
        *self.reports.borrow_mut() = reports;
        self.revision.set(self.revision.get() + 1);
    }
}

impl ReportSource for MemorySource {
    fn fetch(&self) -> Result<Vec<Report>> {
        Ok(self.reports.borrow().clone())
    }

    fn version(&self) -> Result<Option<ChangeToken>> {
        Ok(Some(ChangeToken::new(self.revision.get().to_string())))
    }
}
