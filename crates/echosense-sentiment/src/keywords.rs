//! Frequency-based keyword extraction.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::preprocess::normalize;

/// Tokens shorter than this are not considered keywords.
const MIN_KEYWORD_LEN: usize = 4;

/// Return up to `limit` tokens of length > 3 ranked by descending frequency.
///
/// Ties are broken by first appearance in the text (a stable choice; nothing
/// upstream depends on tie order). Empty input returns an empty vector and
/// this function never fails.
#[must_use]
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    let normalized = normalize(text);

    let mut first_seen: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in normalized
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_KEYWORD_LEN)
    {
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            first_seen.push(token);
        }
        *count += 1;
    }

    // Stable sort keeps first-seen order among equal counts.
    first_seen.sort_by_key(|token| Reverse(counts[token]));
    first_seen
        .into_iter()
        .take(limit)
        .map(str::to_string)
        .collect()
}
