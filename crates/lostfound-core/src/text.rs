//! Text normalization shared by every comparison
//!
//! `normalize` is the single place where case and surrounding whitespace stop
//! mattering; all downstream metrics work on its output.

/// Lowercase and trim a free-text field
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Split normalized text into whitespace-separated words.
///
/// No stemming and no stop-word removal.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
