use serde::Serialize;

/// Classification derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Threshold mapping from a final (clamped) score.
    ///
    /// `score >= 0.6` is positive, `score <= 0.4` is negative, everything in
    /// between is neutral.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score >= 0.6 {
            SentimentLabel::Positive
        } else if score <= 0.4 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "POSITIVE"),
            SentimentLabel::Negative => write!(f, "NEGATIVE"),
            SentimentLabel::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// The outcome of scoring one text.
///
/// `score` is always in `[0, 1]` and `confidence` in `[0.3, 0.95]`.
/// Serializes with the field names the dashboard consumes.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    #[serde(rename = "sentiment_score")]
    pub score: f32,
    #[serde(rename = "sentiment_label")]
    pub label: SentimentLabel,
    pub confidence: f32,
    /// Lexicon words that matched, in order of appearance.
    pub keywords: Vec<String>,
}

impl ScoreResult {
    /// The low-confidence neutral default returned when no lexicon word
    /// matched (and used as the degraded output for failed batch tasks).
    #[must_use]
    pub fn neutral_default() -> Self {
        ScoreResult {
            score: 0.5,
            label: SentimentLabel::Neutral,
            confidence: 0.3,
            keywords: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_thresholds() {
        assert_eq!(SentimentLabel::from_score(0.6), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.4), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.5), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.59), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.41), SentimentLabel::Neutral);
    }

    #[test]
    fn score_result_serializes_with_dashboard_field_names() {
        let result = ScoreResult {
            score: 0.9,
            label: SentimentLabel::Positive,
            confidence: 0.8,
            keywords: vec!["excellent".to_string()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sentiment_label"], "POSITIVE");
        assert!(json["sentiment_score"].is_number());
        assert_eq!(json["keywords"][0], "excellent");
    }

    #[test]
    fn neutral_default_values() {
        let d = ScoreResult::neutral_default();
        assert_eq!(d.score, 0.5);
        assert_eq!(d.label, SentimentLabel::Neutral);
        assert_eq!(d.confidence, 0.3);
        assert!(d.keywords.is_empty());
    }
}
