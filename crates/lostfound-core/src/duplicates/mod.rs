//! Duplicate grouping over a flat list of reports
//!
//! Single-linkage, greedy, one pass: each unprocessed report anchors a group
//! and absorbs every later unprocessed report whose similarity *to the
//! anchor* reaches the threshold. Members are not required to be above the
//! threshold with each other, so a group can chain B-A and B-C even when
//! A-C is weak. Groups of one are dropped and the rest are ranked by
//! confidence, highest first; ties keep discovery order.

mod filter;

use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::report::{Report, ReportKind};
use crate::similarity::{profile_similarity, ReportProfile};
use crate::trace_time;

pub use filter::GroupFilter;

/// Threshold used when none is configured
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Smallest threshold accepted; the valid range is `(0, 1]`
pub const MIN_THRESHOLD: f64 = 0.01;

/// Parameters of one clustering run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusteringConfig {
    threshold: f64,
}

impl ClusteringConfig {
    /// Build a config, clamping the threshold into `(0, 1]`.
    ///
    /// NaN falls back to [`DEFAULT_THRESHOLD`].
    pub fn new(threshold: f64) -> Self {
        let clamped = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(MIN_THRESHOLD, 1.0)
        };
        if clamped != threshold {
            tracing::warn!(requested = threshold, used = clamped, "threshold clamped");
        }
        Self { threshold: clamped }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Display band for a group's confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            ConfidenceLevel::High
        } else if score >= 0.6 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::High => write!(f, "high"),
            ConfidenceLevel::Medium => write!(f, "medium"),
            ConfidenceLevel::Low => write!(f, "low"),
        }
    }
}

/// Reports believed to describe the same physical item
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    members: Vec<Report>,
    confidence: f64,
}

impl DuplicateGroup {
    /// `group_<anchor kind>:<anchor id>`, unique within one run because
    /// anchors are distinct report keys
    pub fn id(&self) -> String {
        format!("group_{}", self.anchor().key())
    }

    /// Members in discovery order; the first one is the anchor
    pub fn members(&self) -> &[Report] {
        &self.members
    }

    pub fn anchor(&self) -> &Report {
        &self.members[0]
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Mean pairwise similarity of the members
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Same value as [`confidence`](Self::confidence), kept under the name the
    /// review screen displays
    pub fn average_similarity(&self) -> f64 {
        self.confidence
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence)
    }

    pub fn has_kind(&self, kind: ReportKind) -> bool {
        self.members.iter().any(|r| r.kind == kind)
    }
}

/// Counters shown above the group list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DuplicateStats {
    pub total_items: usize,
    pub duplicate_groups: usize,
    pub potential_matches: usize,
}

impl DuplicateStats {
    pub fn from_groups(total_items: usize, groups: &[DuplicateGroup]) -> Self {
        Self {
            total_items,
            duplicate_groups: groups.len(),
            potential_matches: groups.iter().map(DuplicateGroup::len).sum(),
        }
    }
}

/// Result of one detection run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DuplicateReport {
    pub groups: Vec<DuplicateGroup>,
    pub stats: DuplicateStats,
}

impl DuplicateReport {
    /// Cluster `reports` and compute the counters
    pub fn detect(reports: &[Report], config: &ClusteringConfig) -> Self {
        let groups = find_duplicate_groups(reports, config);
        let stats = DuplicateStats::from_groups(reports.len(), &groups);
        Self { groups, stats }
    }

    /// Groups passing a presentation filter, in ranking order
    pub fn filtered<'a>(
        &'a self,
        filter: &'a GroupFilter,
    ) -> impl Iterator<Item = &'a DuplicateGroup> + 'a {
        self.groups.iter().filter(move |g| filter.matches(g))
    }
}

/// Group probable duplicates, highest confidence first
#[tracing::instrument(skip_all, fields(items = reports.len(), threshold = config.threshold()))]
pub fn find_duplicate_groups(reports: &[Report], config: &ClusteringConfig) -> Vec<DuplicateGroup> {
    let start = Instant::now();
    let threshold = config.threshold();
    let profiles: Vec<ReportProfile> = reports.iter().map(ReportProfile::new).collect();

    let mut processed: HashSet<(ReportKind, &str)> = HashSet::with_capacity(reports.len());
    let mut groups = Vec::new();
    let mut comparisons = 0usize;

    for (i, anchor) in reports.iter().enumerate() {
        if !processed.insert((anchor.kind, anchor.id.as_str())) {
            continue;
        }

        let mut indices = vec![i];
        for (j, candidate) in reports.iter().enumerate().skip(i + 1) {
            let key = (candidate.kind, candidate.id.as_str());
            if processed.contains(&key) {
                continue;
            }
            comparisons += 1;
            if profile_similarity(&profiles[i], &profiles[j]) >= threshold {
                processed.insert(key);
                indices.push(j);
            }
        }

        if indices.len() > 1 {
            let confidence = mean_pairwise(&indices, &profiles);
            groups.push(DuplicateGroup {
                members: indices.iter().map(|&k| reports[k].clone()).collect(),
                confidence,
            });
        }
    }

    groups.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    tracing::debug!(groups = groups.len(), comparisons, "duplicate detection finished");
    trace_time!(start, "find_duplicate_groups");

    groups
}

/// Mean similarity over every unordered pair of `members`; 0 below two members
pub fn group_confidence(members: &[Report]) -> f64 {
    let profiles: Vec<ReportProfile> = members.iter().map(ReportProfile::new).collect();
    let indices: Vec<usize> = (0..members.len()).collect();
    mean_pairwise(&indices, &profiles)
}

fn mean_pairwise(indices: &[usize], profiles: &[ReportProfile]) -> f64 {
    if indices.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut comparisons = 0usize;
    for (pos, &i) in indices.iter().enumerate() {
        for &j in &indices[pos + 1..] {
            total += profile_similarity(&profiles[i], &profiles[j]);
            comparisons += 1;
        }
    }

    total / comparisons as f64
}
