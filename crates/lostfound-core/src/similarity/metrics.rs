//! String similarity primitives
//!
//! | Metric      | Unit            | Complexity |
//! |-------------|-----------------|------------|
//! | Jaccard     | word set        | O(n + m)   |
//! | Levenshtein | character       | O(n × m)   |
//! | Cosine      | word frequency  | O(n + m)   |
//!
//! Every metric is symmetric and returns a value in `[0, 1]`. The `*_prepared`
//! variants work on [`PreparedText`] so the clustering loop builds each
//! report's vocabulary once instead of once per comparison.

use std::collections::BTreeMap;

use crate::text::{normalize, words};

/// Blend of the three metrics, in tenths so a perfect match sums to exactly 1
const JACCARD_WEIGHT: f64 = 4.0;
const LEVENSHTEIN_WEIGHT: f64 = 3.0;
const COSINE_WEIGHT: f64 = 3.0;
const WEIGHT_TOTAL: f64 = 10.0;

/// A normalized text field with its derived token structures
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreparedText {
    normalized: String,
    chars: Vec<char>,
    term_counts: BTreeMap<String, u32>,
}

impl PreparedText {
    pub fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        let chars = normalized.chars().collect();
        let mut term_counts = BTreeMap::new();
        for word in words(&normalized) {
            *term_counts.entry(word.to_string()).or_insert(0) += 1;
        }
        Self {
            normalized,
            chars,
            term_counts,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Word-set overlap: |A ∩ B| / |A ∪ B|. Two empty texts score 0.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    jaccard_prepared(&PreparedText::new(a), &PreparedText::new(b))
}

pub fn jaccard_prepared(a: &PreparedText, b: &PreparedText) -> f64 {
    let intersection = a
        .term_counts
        .keys()
        .filter(|word| b.term_counts.contains_key(*word))
        .count();
    let union = a.term_counts.len() + b.term_counts.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Classic edit distance with unit costs, over characters
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    char_distance(&a, &b)
}

fn char_distance(a: &[char], b: &[char]) -> usize {
    // Keep the shorter sequence in the row
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (j, long_ch) in long.iter().enumerate() {
        curr[0] = j + 1;
        for (i, short_ch) in short.iter().enumerate() {
            let cost = usize::from(short_ch != long_ch);
            curr[i + 1] = (prev[i + 1] + 1)
                .min(curr[i] + 1)
                .min(prev[i] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// `(max_len - distance) / max_len` on normalized text.
///
/// Two empty strings are identical and score 1.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    levenshtein_prepared(&PreparedText::new(a), &PreparedText::new(b))
}

pub fn levenshtein_prepared(a: &PreparedText, b: &PreparedText) -> f64 {
    let max_len = a.chars.len().max(b.chars.len());
    if max_len == 0 {
        return 1.0;
    }
    let distance = char_distance(&a.chars, &b.chars);
    (max_len - distance) as f64 / max_len as f64
}

/// Cosine of the word-frequency vectors; 0 when either vector is empty
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    cosine_prepared(&PreparedText::new(a), &PreparedText::new(b))
}

pub fn cosine_prepared(a: &PreparedText, b: &PreparedText) -> f64 {
    let dot: u64 = a
        .term_counts
        .iter()
        .filter_map(|(word, &count_a)| {
            b.term_counts
                .get(word)
                .map(|&count_b| u64::from(count_a) * u64::from(count_b))
        })
        .sum();
    let norm_a: u64 = a.term_counts.values().map(|&c| u64::from(c).pow(2)).sum();
    let norm_b: u64 = b.term_counts.values().map(|&c| u64::from(c).pow(2)).sum();

    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }

    dot as f64 / ((norm_a as f64).sqrt() * (norm_b as f64).sqrt())
}

/// Combined text score: 0.4·Jaccard + 0.3·Levenshtein + 0.3·Cosine.
///
/// An empty side scores 0 and equal normalized texts score 1 without running
/// the metrics.
pub fn text_similarity(a: &str, b: &str) -> f64 {
    text_similarity_prepared(&PreparedText::new(a), &PreparedText::new(b))
}

pub fn text_similarity_prepared(a: &PreparedText, b: &PreparedText) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.normalized == b.normalized {
        return 1.0;
    }

    let blended = JACCARD_WEIGHT * jaccard_prepared(a, b)
        + LEVENSHTEIN_WEIGHT * levenshtein_prepared(a, b)
        + COSINE_WEIGHT * cosine_prepared(a, b);

    (blended / WEIGHT_TOTAL).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_jaccard() {
        assert!(approx(jaccard_similarity("lost near library", "found near library"), 0.5));
        assert!(approx(jaccard_similarity("red bag", "RED  bag "), 1.0));
        assert!(approx(jaccard_similarity("red bag", "blue pen"), 0.0));
    }

    #[test]
    fn test_jaccard_empty_inputs() {
        assert_eq!(jaccard_similarity("", ""), 0.0);
        assert_eq!(jaccard_similarity("wallet", ""), 0.0);
        assert_eq!(jaccard_similarity("   ", "\t"), 0.0);
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "xyz"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
        assert_eq!(levenshtein_distance("lost", "found"), 4);
        assert_eq!(levenshtein_distance("cats", "cat"), 1);
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert_eq!(levenshtein_similarity("abc", ""), 0.0);
        assert!(approx(levenshtein_similarity("Kitten", "sitting"), 4.0 / 7.0));
        assert!(approx(
            levenshtein_similarity("lost near library", "found near library"),
            14.0 / 18.0
        ));
    }

    #[test]
    fn test_levenshtein_counts_characters_not_bytes() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert!(approx(levenshtein_similarity("café", "cafe"), 0.75));
    }

    #[test]
    fn test_cosine() {
        assert!(approx(
            cosine_similarity("lost near library", "found near library"),
            2.0 / 3.0
        ));
        assert!(approx(cosine_similarity("bag bag", "bag"), 1.0));
        assert_eq!(cosine_similarity("", "bag"), 0.0);
        assert_eq!(cosine_similarity("red", "blue"), 0.0);
    }

    #[test]
    fn test_text_similarity_blend() {
        // 0.4 * 0.5 + 0.3 * 14/18 + 0.3 * 2/3
        let expected = (4.0 * 0.5 + 3.0 * (14.0 / 18.0) + 3.0 * (2.0 / 3.0)) / 10.0;
        assert!(approx(
            text_similarity("lost near library", "found near library"),
            expected
        ));
    }

    #[test]
    fn test_text_similarity_shortcuts() {
        assert_eq!(text_similarity("Blue Wallet", "  blue wallet"), 1.0);
        assert_eq!(text_similarity("", "blue wallet"), 0.0);
        assert_eq!(text_similarity("", ""), 0.0);
        assert_eq!(text_similarity("   ", "   "), 0.0);
    }

    #[test]
    fn test_metrics_are_symmetric() {
        let pairs = [
            ("black iphone 13 pro", "iphone 13 black case"),
            ("a a b", "a b b c"),
            ("", "keys"),
            ("main library second floor", "library"),
        ];
        for (a, b) in pairs {
            assert_eq!(jaccard_similarity(a, b), jaccard_similarity(b, a));
            assert_eq!(levenshtein_similarity(a, b), levenshtein_similarity(b, a));
            assert_eq!(cosine_similarity(a, b), cosine_similarity(b, a));
            assert_eq!(text_similarity(a, b), text_similarity(b, a));
        }
    }

    #[test]
    fn test_prepared_matches_plain() {
        let a = PreparedText::new("Grey Hoodie with zip");
        let b = PreparedText::new("grey hoodie");
        assert_eq!(
            text_similarity_prepared(&a, &b),
            text_similarity("Grey Hoodie with zip", "grey hoodie")
        );
        assert_eq!(a.as_str(), "grey hoodie with zip");
    }
}
