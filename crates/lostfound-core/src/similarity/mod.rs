//! Similarity engine for lost and found reports
//!
//! A pair of reports is scored from four factors:
//!
//! | Factor      | Weight | Source                                    |
//! |-------------|--------|-------------------------------------------|
//! | Title       | 0.4    | combined text metric                      |
//! | Description | 0.3    | combined text metric                      |
//! | Location    | 0.2    | exact / substring / combined text metric  |
//! | Category    | 0.1    | keyword bucket of the titles              |
//!
//! The combined text metric blends Jaccard (0.4), Levenshtein (0.3) and
//! cosine (0.3) similarity. Scores are symmetric, deterministic and bounded
//! to `[0, 1]`.

mod fields;
mod metrics;
mod scorer;

pub use fields::{category_similarity, location_similarity, PARTIAL_LOCATION_MATCH};
pub use metrics::{
    cosine_similarity, jaccard_similarity, levenshtein_distance, levenshtein_similarity,
    text_similarity, PreparedText,
};
pub use scorer::{
    explain, profile_similarity, report_similarity, ReportProfile, SimilarityBreakdown,
};
