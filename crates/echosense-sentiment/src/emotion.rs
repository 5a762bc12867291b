//! Heuristic emotion detection over fixed keyword lists.

use serde::Serialize;

use crate::lexicon::EMOTION_LEXICONS;
use crate::preprocess::normalize;

/// The six tracked emotion categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Anger,
    Fear,
    Sadness,
    Surprise,
    Trust,
}

impl Emotion {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
            Emotion::Trust => "trust",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category match counts plus the dominant emotion, if any.
#[derive(Debug, Clone, Serialize)]
pub struct EmotionResult {
    /// Match counts in category declaration order.
    pub counts: Vec<(Emotion, usize)>,
    /// The unique highest-count emotion. `None` when nothing matched or the
    /// top count is shared by more than one category.
    pub dominant: Option<Emotion>,
}

impl EmotionResult {
    /// Display label for the dominant emotion, `"neutral"` when there is none.
    #[must_use]
    pub fn dominant_label(&self) -> &'static str {
        self.dominant.map_or("neutral", Emotion::as_str)
    }
}

/// Count emotion-keyword matches per category.
///
/// Matching is against whole tokens of the normalized text. Never fails;
/// empty input yields zero counts and a neutral dominant.
#[must_use]
pub fn detect_emotions(text: &str) -> EmotionResult {
    let normalized = normalize(text);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let counts: Vec<(Emotion, usize)> = EMOTION_LEXICONS
        .iter()
        .map(|&(emotion, words)| {
            let count = tokens
                .iter()
                .filter(|&&token| words.contains(&token))
                .count();
            (emotion, count)
        })
        .collect();

    let top = counts.iter().map(|&(_, count)| count).max().unwrap_or(0);
    let dominant = if top == 0 {
        None
    } else {
        let mut at_top = counts.iter().filter(|&&(_, count)| count == top);
        match (at_top.next(), at_top.next()) {
            (Some(&(emotion, _)), None) => Some(emotion),
            _ => None,
        }
    };

    EmotionResult { counts, dominant }
}
