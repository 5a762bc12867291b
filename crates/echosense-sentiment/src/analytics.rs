//! Aggregate helpers over scored results.
//!
//! These back the dashboard-style summaries: label distribution and
//! confidence filtering.

use serde::Serialize;

use crate::types::{ScoreResult, SentimentLabel};

/// Percentage share of each label across a result set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SentimentDistribution {
    pub positive: f32,
    pub negative: f32,
    pub neutral: f32,
}

/// Percentage distribution of labels. All zeros for an empty slice.
#[must_use]
pub fn sentiment_distribution(results: &[ScoreResult]) -> SentimentDistribution {
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut neutral = 0usize;
    for result in results {
        match result.label {
            SentimentLabel::Positive => positive += 1,
            SentimentLabel::Negative => negative += 1,
            SentimentLabel::Neutral => neutral += 1,
        }
    }

    if results.is_empty() {
        return SentimentDistribution {
            positive: 0.0,
            negative: 0.0,
            neutral: 0.0,
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let total = results.len() as f32;
    #[allow(clippy::cast_precision_loss)]
    let pct = |count: usize| count as f32 / total * 100.0;

    SentimentDistribution {
        positive: pct(positive),
        negative: pct(negative),
        neutral: pct(neutral),
    }
}

/// Results carrying `label` with at least `min_confidence`.
#[must_use]
pub fn filter_by_label(
    results: &[ScoreResult],
    label: SentimentLabel,
    min_confidence: f32,
) -> Vec<ScoreResult> {
    results
        .iter()
        .filter(|r| r.label == label && r.confidence >= min_confidence)
        .cloned()
        .collect()
}

/// Results with at least `min_confidence`, regardless of label.
#[must_use]
pub fn high_confidence(results: &[ScoreResult], min_confidence: f32) -> Vec<ScoreResult> {
    results
        .iter()
        .filter(|r| r.confidence >= min_confidence)
        .cloned()
        .collect()
}
