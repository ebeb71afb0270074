//! Keyword-based auto-categorization
//!
//! Each report is scored against every category in
//! [`TAGGING_CATEGORIES`](crate::category::TAGGING_CATEGORIES): one point per
//! keyword found in the title and description, a bonus when the title or the
//! description contains any keyword, all divided by the keyword count so long
//! lists do not dominate. The best strictly-positive score wins; otherwise the
//! report is `Other`.
//!
//! Writing categories back to the store is not done here. [`plan_updates`]
//! describes the writes and the caller applies them.

use std::collections::BTreeSet;
use std::time::Instant;

use serde::Serialize;

use crate::category::{Category, TAGGING_CATEGORIES};
use crate::report::{Report, ReportKey, ReportKind};
use crate::stats::percentage;
use crate::trace_time;

/// Default minimum confidence for counting or applying a prediction
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Confidence assigned to `Other` predictions
pub const OTHER_CONFIDENCE: f64 = 0.1;

const TITLE_BONUS: f64 = 0.5;
const DESCRIPTION_BONUS: f64 = 0.3;
const MULTI_MATCH_BONUS: f64 = 0.2;
const LONG_DESCRIPTION_BONUS: f64 = 0.1;
const LONG_DESCRIPTION_CHARS: usize = 20;

/// Lowercased fields of one report as the keyword matcher sees them
struct TaggingText {
    title: String,
    description: String,
    combined: String,
}

impl TaggingText {
    fn new(report: &Report) -> Self {
        let title = report.title.to_lowercase();
        let description = report.description.to_lowercase();
        let combined = format!("{title} {description}");
        Self {
            title,
            description,
            combined,
        }
    }

    fn matches(&self, keywords: &[&str]) -> usize {
        keywords.iter().filter(|k| self.combined.contains(*k)).count()
    }
}

/// Clamp a confidence cutoff into `[0, 1]`; NaN falls back to the default
pub fn clamp_confidence_threshold(threshold: f64) -> f64 {
    let clamped = if threshold.is_nan() {
        DEFAULT_CONFIDENCE_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    };
    if clamped != threshold {
        tracing::warn!(requested = threshold, used = clamped, "confidence threshold clamped");
    }
    clamped
}

/// Most likely category for a report
pub fn predict_category(report: &Report) -> Category {
    predict(&TaggingText::new(report))
}

fn predict(text: &TaggingText) -> Category {
    let mut best = Category::Other;
    let mut best_score = 0.0;

    for &(category, keywords) in TAGGING_CATEGORIES.entries() {
        if category == Category::Other || keywords.is_empty() {
            continue;
        }

        let mut score = text.matches(keywords) as f64;
        if keywords.iter().any(|k| text.title.contains(k)) {
            score += TITLE_BONUS;
        }
        if keywords.iter().any(|k| text.description.contains(k)) {
            score += DESCRIPTION_BONUS;
        }
        score /= keywords.len() as f64;

        if score > best_score {
            best_score = score;
            best = category;
        }
    }

    best
}

/// Confidence in `[0, 1]` that `report` belongs to `category`
pub fn category_confidence(report: &Report, category: Category) -> f64 {
    confidence(&TaggingText::new(report), category)
}

fn confidence(text: &TaggingText, category: Category) -> f64 {
    let keywords = TAGGING_CATEGORIES.keywords(category);
    if category == Category::Other || keywords.is_empty() {
        return OTHER_CONFIDENCE;
    }

    let matches = text.matches(keywords);
    let mut value = (matches as f64 / keywords.len() as f64).min(1.0);
    if matches > 1 {
        value += MULTI_MATCH_BONUS;
    }
    if text.description.chars().count() > LONG_DESCRIPTION_CHARS {
        value += LONG_DESCRIPTION_BONUS;
    }
    value.min(1.0)
}

/// A report with its predicted category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedReport {
    pub report: Report,
    pub category: Category,
    pub confidence: f64,
}

impl CategorizedReport {
    pub fn new(report: Report) -> Self {
        let text = TaggingText::new(&report);
        let category = predict(&text);
        let confidence = confidence(&text, category);
        Self {
            report,
            category,
            confidence,
        }
    }
}

/// Predict a category for every report, keeping input order
#[tracing::instrument(skip_all, fields(items = reports.len()))]
pub fn categorize(reports: &[Report]) -> Vec<CategorizedReport> {
    let start = Instant::now();
    let categorized: Vec<CategorizedReport> =
        reports.iter().cloned().map(CategorizedReport::new).collect();
    trace_time!(start, "categorize");
    categorized
}

/// Counters for the categorization view
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TaggingStats {
    pub total_items: usize,
    /// Reports whose confidence reaches the threshold
    pub categorized_items: usize,
    /// `categorized_items` as a percentage of `total_items`
    pub accuracy: f64,
    /// Distinct predicted categories, `Other` included
    pub categories_found: usize,
}

impl TaggingStats {
    pub fn compute(items: &[CategorizedReport], threshold: f64) -> Self {
        let categorized_items = items.iter().filter(|i| i.confidence >= threshold).count();
        let categories: BTreeSet<Category> = items.iter().map(|i| i.category).collect();
        Self {
            total_items: items.len(),
            categorized_items,
            accuracy: percentage(categorized_items, items.len()),
            categories_found: categories.len(),
        }
    }
}

/// Share of one category among the predictions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub count: usize,
    pub percentage: f64,
}

/// Count per category in table order, categories with no reports included
pub fn category_distribution(items: &[CategorizedReport]) -> Vec<CategoryShare> {
    TAGGING_CATEGORIES
        .entries()
        .iter()
        .map(|&(category, _)| {
            let count = items.iter().filter(|i| i.category == category).count();
            CategoryShare {
                category,
                count,
                percentage: percentage(count, items.len()),
            }
        })
        .collect()
}

/// Display filter over categorized reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggingFilter {
    pub category: Option<Category>,
    pub confidence_threshold: f64,
}

impl Default for TaggingFilter {
    fn default() -> Self {
        Self {
            category: None,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl TaggingFilter {
    pub fn matches(&self, item: &CategorizedReport) -> bool {
        self.category.is_none_or(|c| item.category == c)
            && item.confidence >= self.confidence_threshold
    }
}

/// One pending category write for the data store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryUpdate {
    pub kind: ReportKind,
    pub table: &'static str,
    pub id: String,
    pub category: Category,
    pub confidence_score: f64,
    pub auto_categorized: bool,
}

impl CategoryUpdate {
    pub fn key(&self) -> ReportKey {
        ReportKey::new(self.kind, self.id.clone())
    }
}

/// Writes for confident, non-`Other` predictions, in input order
pub fn plan_updates(items: &[CategorizedReport], threshold: f64) -> Vec<CategoryUpdate> {
    let updates: Vec<CategoryUpdate> = items
        .iter()
        .filter(|i| i.confidence >= threshold && i.category != Category::Other)
        .map(|i| CategoryUpdate {
            kind: i.report.kind,
            table: i.report.kind.table(),
            id: i.report.id.clone(),
            category: i.category,
            confidence_score: i.confidence,
            auto_categorized: true,
        })
        .collect();

    tracing::debug!(
        candidates = items.len(),
        updates = updates.len(),
        threshold,
        "planned category updates"
    );
    updates
}
