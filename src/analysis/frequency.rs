//! Word-frequency counting over lyric text.
//!
//! Tokens are lowercased and stripped of punctuation before counting; no
//! stemming or stopword filtering is applied, so the counts are a faithful
//! picture of the raw lyrics.

use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Counts the normalized words in a block of text.
///
/// Words are split on Unicode word boundaries, lowercased, and stripped of
/// any remaining punctuation (so "don't" counts as "dont"). Tokens that are
/// empty after normalization are discarded.
///
/// # Examples
///
/// ```
/// use lyricstats::analysis::count_words;
///
/// let counts = count_words("Hello, hello!");
/// assert_eq!(counts.get("hello"), Some(&2));
/// ```
pub fn count_words(text: &str) -> HashMap<String, u64> {
    let mut counts = HashMap::new();

    for word in text.unicode_words() {
        let normalized: String = word
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        if !normalized.is_empty() {
            *counts.entry(normalized).or_insert(0) += 1;
        }
    }

    counts
}

/// Merges the counts of `supplement` into `source`.
///
/// Used to build per-genre totals out of the per-artist counts.
pub fn merge_counts(source: &mut HashMap<String, u64>, supplement: &HashMap<String, u64>) {
    for (word, count) in supplement {
        *source.entry(word.clone()).or_insert(0) += count;
    }
}

/// Orders counts by frequency, descending.
///
/// Ties are broken alphabetically so the output is fully deterministic:
/// running the analysis twice over the same cache produces byte-identical
/// result files.
pub fn sorted_counts(counts: &HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut pairs: Vec<(String, u64)> = counts
        .iter()
        .map(|(word, count)| (word.clone(), *count))
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs
}
