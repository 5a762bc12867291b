//! Text normalization for lexical matching.

/// Normalize raw text: lowercase, replace every non-alphanumeric character
/// with a space, collapse whitespace runs, and trim.
///
/// Empty input yields an empty string; this function never fails.
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
