//! Lexicon scorer: weighted keyword counting plus context modifiers.

use crate::lexicon::{NEGATIVE_WORDS, NEUTRAL_WORDS, POSITIVE_WORDS};
use crate::modifiers::{self, ContextCues};
use crate::preprocess::normalize;
use crate::types::{ScoreResult, SentimentLabel};

/// Tokens shorter than this are ignored by lexical matching.
const MIN_TOKEN_LEN: usize = 3;

/// Score one text.
///
/// Normalizes the text, counts lexicon matches over tokens of length ≥ 3
/// (positive and negative weight 1, neutral weight 0.5), derives a base score
///
/// ```text
/// score = positive_weight * 0.8 + negative_weight * 0.2 + 0.1
/// ```
///
/// and runs it through the context-modifier pipeline. When no lexicon word
/// matches, the low-confidence neutral default (`score 0.5`, `confidence
/// 0.3`) is returned directly and no modifier runs. Never fails: empty or
/// nonsense input degrades to that default.
///
/// The 0.8/0.2 weighting is inherited from the original dashboard scorer and
/// kept for behavioral parity; it biases scores upward (see DESIGN.md).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_sentiment(text: &str) -> ScoreResult {
    let normalized = normalize(text);
    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .collect();

    let mut positive: u32 = 0;
    let mut negative: u32 = 0;
    let mut neutral: u32 = 0;
    let mut keywords: Vec<String> = Vec::new();

    for &token in &tokens {
        if POSITIVE_WORDS.contains(&token) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&token) {
            negative += 1;
        } else if NEUTRAL_WORDS.contains(&token) {
            neutral += 1;
        } else {
            continue;
        }
        keywords.push(token.to_string());
    }

    if positive + negative + neutral == 0 {
        return ScoreResult::neutral_default();
    }

    let positive_score = positive as f32;
    let negative_score = negative as f32;
    let total_score = positive_score + negative_score + neutral as f32 * 0.5;

    let positive_weight = positive_score / total_score;
    let negative_weight = negative_score / total_score;
    let base = positive_weight * 0.8 + negative_weight * 0.2 + 0.1;

    let cues = ContextCues::from_text(text, &normalized);
    let score = modifiers::apply(base, &cues);

    let word_count = tokens.len() as f32;
    let confidence = (total_score / word_count * 2.0).clamp(0.4, 0.95);

    ScoreResult {
        score,
        label: SentimentLabel::from_score(score),
        confidence,
        keywords,
    }
}
