//! Pairwise report scoring

use serde::Serialize;

use crate::category::Category;
use crate::report::Report;
use crate::similarity::fields::{bucket_similarity, location_prepared, title_bucket};
use crate::similarity::metrics::{text_similarity_prepared, PreparedText};

// Field weights in tenths: title 0.4, description 0.3, location 0.2, category 0.1
const TITLE_WEIGHT: f64 = 4.0;
const DESCRIPTION_WEIGHT: f64 = 3.0;
const LOCATION_WEIGHT: f64 = 2.0;
const CATEGORY_WEIGHT: f64 = 1.0;
const WEIGHT_TOTAL: f64 = 10.0;

/// Comparison features of one report, computed once per clustering run
#[derive(Debug, Clone)]
pub struct ReportProfile {
    title: PreparedText,
    description: PreparedText,
    place: PreparedText,
    bucket: Category,
}

impl ReportProfile {
    pub fn new(report: &Report) -> Self {
        Self {
            title: PreparedText::new(&report.title),
            description: PreparedText::new(&report.description),
            place: PreparedText::new(&report.place),
            bucket: title_bucket(&report.title),
        }
    }

    pub fn bucket(&self) -> Category {
        self.bucket
    }
}

/// The four factor scores of one pair and their weighted total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityBreakdown {
    pub title: f64,
    pub description: f64,
    pub location: f64,
    pub category: f64,
    pub score: f64,
}

impl SimilarityBreakdown {
    pub fn between(a: &ReportProfile, b: &ReportProfile) -> Self {
        let title = text_similarity_prepared(&a.title, &b.title);
        let description = text_similarity_prepared(&a.description, &b.description);
        let location = location_prepared(&a.place, &b.place);
        let category = bucket_similarity(a.bucket, b.bucket);

        let weighted = TITLE_WEIGHT * title
            + DESCRIPTION_WEIGHT * description
            + LOCATION_WEIGHT * location
            + CATEGORY_WEIGHT * category;

        Self {
            title,
            description,
            location,
            category,
            score: (weighted / WEIGHT_TOTAL).clamp(0.0, 1.0),
        }
    }
}

/// Similarity in `[0, 1]` between two profiled reports
pub fn profile_similarity(a: &ReportProfile, b: &ReportProfile) -> f64 {
    SimilarityBreakdown::between(a, b).score
}

/// Similarity in `[0, 1]` between two reports
pub fn report_similarity(a: &Report, b: &Report) -> f64 {
    profile_similarity(&ReportProfile::new(a), &ReportProfile::new(b))
}

/// Per-factor view of a pair, for explaining why two reports matched
pub fn explain(a: &Report, b: &Report) -> SimilarityBreakdown {
    SimilarityBreakdown::between(&ReportProfile::new(a), &ReportProfile::new(b))
}
