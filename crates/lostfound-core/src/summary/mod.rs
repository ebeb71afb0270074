//! Executive summary over the lost and found tables
//!
//! Everything here is a pure function of the reports, the number of user
//! profiles and a caller-supplied `now`. Dates and hours are taken in UTC.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use serde::Serialize;

use crate::category::{Category, SUMMARY_BUCKETS};
use crate::report::{Report, ReportKind};
use crate::stats::{percentage, round2};

const DAILY_BUCKETS: i64 = 7;
const WEEKLY_BUCKETS: i64 = 4;
const TOP_LOCATIONS: usize = 5;
const TOP_CATEGORIES: usize = 5;
const TOP_HOURS: usize = 3;
const MAX_RESOLUTION_HOURS: f64 = 24.0 * 30.0;

const LOW_SUCCESS_RATE: f64 = 50.0;
const HIGH_SUCCESS_RATE: f64 = 80.0;
const SLOW_RESOLUTION_HOURS: f64 = 24.0;

/// Headline counters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Overview {
    pub total_items: usize,
    pub lost_items: usize,
    pub found_items: usize,
    pub resolved_items: usize,
    pub active_users: usize,
    /// Percentage of reports marked resolved
    pub success_rate: f64,
}

/// Counts for one trend bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodStats {
    /// `YYYY-MM-DD` for daily buckets, `Week N` for weekly ones
    pub label: String,
    pub lost: usize,
    pub found: usize,
    pub resolved: usize,
}

impl PeriodStats {
    fn tally<'a>(label: String, reports: impl Iterator<Item = &'a Report>) -> Self {
        let mut stats = PeriodStats {
            label,
            lost: 0,
            found: 0,
            resolved: 0,
        };
        for report in reports {
            match report.kind {
                ReportKind::Lost => stats.lost += 1,
                ReportKind::Found => stats.found += 1,
            }
            if report.is_resolved() {
                stats.resolved += 1;
            }
        }
        stats
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Trends {
    /// Last seven calendar days, oldest first
    pub daily: Vec<PeriodStats>,
    /// Last four weeks, `Week 1` oldest
    pub weekly: Vec<PeriodStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourCount {
    pub hour: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Insights {
    pub top_locations: Vec<LocationCount>,
    pub common_categories: Vec<CategoryCount>,
    pub peak_hours: Vec<HourCount>,
    /// Mean hours from report to resolution, 0 when nothing qualifies
    pub resolution_time_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Success,
    Warning,
    Info,
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationKind::Success => write!(f, "success"),
            RecommendationKind::Warning => write!(f, "warning"),
            RecommendationKind::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub action: String,
}

impl Recommendation {
    fn new(kind: RecommendationKind, title: &str, description: String, action: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description,
            action: action.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ExecutiveSummary {
    pub overview: Overview,
    pub trends: Trends,
    pub insights: Insights,
    pub recommendations: Vec<Recommendation>,
}

/// Build the executive summary as of `now`
#[tracing::instrument(skip_all, fields(lost = lost.len(), found = found.len()))]
pub fn summarize(
    lost: &[Report],
    found: &[Report],
    profile_count: usize,
    now: DateTime<Utc>,
) -> ExecutiveSummary {
    let all: Vec<&Report> = lost.iter().chain(found).collect();

    let resolved_items = all.iter().filter(|r| r.is_resolved()).count();
    let overview = Overview {
        total_items: all.len(),
        lost_items: lost.len(),
        found_items: found.len(),
        resolved_items,
        active_users: profile_count,
        success_rate: percentage(resolved_items, all.len()),
    };

    let trends = trends(&all, now);
    let insights = insights(&all);
    let recommendations = recommendations(&overview, &insights);

    tracing::debug!(
        total = overview.total_items,
        recommendations = recommendations.len(),
        "summary built"
    );

    ExecutiveSummary {
        overview,
        trends,
        insights,
        recommendations,
    }
}

fn trends(all: &[&Report], now: DateTime<Utc>) -> Trends {
    let today = now.date_naive();
    let daily = (0..DAILY_BUCKETS)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            PeriodStats::tally(
                day.format("%Y-%m-%d").to_string(),
                all.iter().copied().filter(|r| created_on(r, day)),
            )
        })
        .collect();

    let weekly = (0..WEEKLY_BUCKETS)
        .rev()
        .map(|back| {
            let start = now - Duration::days((back + 1) * 7);
            let end = start + Duration::days(6);
            PeriodStats::tally(
                format!("Week {}", WEEKLY_BUCKETS - back),
                all.iter()
                    .copied()
                    .filter(|r| r.created_at.is_some_and(|t| t >= start && t <= end)),
            )
        })
        .collect();

    Trends { daily, weekly }
}

fn created_on(report: &Report, day: NaiveDate) -> bool {
    report.created_at.is_some_and(|t| t.date_naive() == day)
}

fn insights(all: &[&Report]) -> Insights {
    let mut locations: BTreeMap<String, usize> = BTreeMap::new();
    let mut categories: BTreeMap<Category, usize> = BTreeMap::new();
    let mut hours: BTreeMap<u32, usize> = BTreeMap::new();

    for report in all {
        let place = report.place.trim().to_lowercase();
        if !place.is_empty() {
            *locations.entry(place).or_default() += 1;
        }
        *categories
            .entry(SUMMARY_BUCKETS.classify(&report.title))
            .or_default() += 1;
        if let Some(created) = report.created_at {
            *hours.entry(created.hour()).or_default() += 1;
        }
    }

    Insights {
        top_locations: top_counts(locations, TOP_LOCATIONS)
            .into_iter()
            .map(|(location, count)| LocationCount { location, count })
            .collect(),
        common_categories: top_counts(categories, TOP_CATEGORIES)
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect(),
        peak_hours: top_counts(hours, TOP_HOURS)
            .into_iter()
            .map(|(hour, count)| HourCount { hour, count })
            .collect(),
        resolution_time_hours: average_resolution_hours(all),
    }
}

/// Highest counts first; equal counts keep key order
fn top_counts<K: Ord>(counts: BTreeMap<K, usize>, limit: usize) -> Vec<(K, usize)> {
    let mut ranked: Vec<(K, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

fn average_resolution_hours(all: &[&Report]) -> f64 {
    let durations: Vec<f64> = all
        .iter()
        .filter(|r| r.is_resolved())
        .filter_map(|r| {
            let elapsed = r.updated_at? - r.created_at?;
            Some(elapsed.num_milliseconds() as f64 / 3_600_000.0)
        })
        .filter(|&hours| hours > 0.0 && hours < MAX_RESOLUTION_HOURS)
        .collect();

    if durations.is_empty() {
        return 0.0;
    }
    round2(durations.iter().sum::<f64>() / durations.len() as f64)
}

fn recommendations(overview: &Overview, insights: &Insights) -> Vec<Recommendation> {
    let mut out = Vec::new();
    let rate = overview.success_rate;

    if overview.total_items > 0 && rate < LOW_SUCCESS_RATE {
        out.push(Recommendation::new(
            RecommendationKind::Warning,
            "Low Success Rate",
            format!(
                "Current success rate is {rate}%. Consider improving item descriptions and photos."
            ),
            "Improve item quality",
        ));
    } else if rate > HIGH_SUCCESS_RATE {
        out.push(Recommendation::new(
            RecommendationKind::Success,
            "Excellent Performance",
            format!("{rate}% success rate shows effective management."),
            "Maintain current practices",
        ));
    }

    if let Some(peak) = insights.peak_hours.first() {
        out.push(Recommendation::new(
            RecommendationKind::Info,
            "Peak Activity Time",
            format!(
                "Most items are reported at {}:00 UTC. Consider increasing monitoring during this time.",
                peak.hour
            ),
            "Optimize staffing",
        ));
    }

    if let Some(top) = insights.top_locations.first() {
        out.push(Recommendation::new(
            RecommendationKind::Info,
            "High-Risk Location",
            format!(
                "{} has the most reports ({}). Consider preventive measures.",
                top.location, top.count
            ),
            "Add security measures",
        ));
    }

    if insights.resolution_time_hours > SLOW_RESOLUTION_HOURS {
        out.push(Recommendation::new(
            RecommendationKind::Warning,
            "Slow Resolution",
            format!(
                "Average resolution time is {:.1} hours. Consider faster response protocols.",
                insights.resolution_time_hours
            ),
            "Improve response time",
        ));
    }

    out
}

/// Human-friendly duration: minutes under an hour, hours under a day, else days
pub fn format_hours(hours: f64) -> String {
    if hours < 1.0 {
        format!("{} minutes", (hours * 60.0).round())
    } else if hours < 24.0 {
        format!("{} hours", hours.round())
    } else {
        format!("{} days", (hours / 24.0).round())
    }
}
