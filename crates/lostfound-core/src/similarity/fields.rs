//! Field-level combinators built on the text metrics

use crate::category::{Category, DUPLICATE_BUCKETS};
use crate::similarity::metrics::{text_similarity_prepared, PreparedText};

/// Score for one location contained in the other ("Library" / "Main Library")
pub const PARTIAL_LOCATION_MATCH: f64 = 0.8;

/// Location similarity: empty → 0, equal → 1, substring → 0.8, else text score
pub fn location_similarity(a: &str, b: &str) -> f64 {
    location_prepared(&PreparedText::new(a), &PreparedText::new(b))
}

pub fn location_prepared(a: &PreparedText, b: &PreparedText) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.as_str() == b.as_str() {
        return 1.0;
    }
    if a.as_str().contains(b.as_str()) || b.as_str().contains(a.as_str()) {
        return PARTIAL_LOCATION_MATCH;
    }
    text_similarity_prepared(a, b)
}

/// Keyword bucket of a title for the category factor
pub fn title_bucket(title: &str) -> Category {
    DUPLICATE_BUCKETS.classify(title)
}

/// 1 when both titles fall in the same bucket (Other matches Other), else 0
pub fn category_similarity(title_a: &str, title_b: &str) -> f64 {
    bucket_similarity(title_bucket(title_a), title_bucket(title_b))
}

pub fn bucket_similarity(a: Category, b: Category) -> f64 {
    if a == b {
        1.0
    } else {
        0.0
    }
}
