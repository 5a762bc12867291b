//! Ordered context-modifier pipeline.
//!
//! Each modifier is a pure `score -> score` transform driven by cues
//! extracted once per text. The pipeline order is fixed: negation,
//! intensifier, question mark, exclamation marks. The fold result is clamped
//! to `[0, 1]`.

use crate::lexicon::{INTENSIFIER_WORDS, NEGATION_WORDS};

/// Surface cues feeding the modifier pipeline.
///
/// Word cues are matched against whole tokens of the normalized text (no
/// token-length filter, so two-letter words like `no` participate).
/// Punctuation cues come from the raw text, since normalization strips it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContextCues {
    pub has_negation: bool,
    pub has_intensifier: bool,
    pub has_question: bool,
    pub exclamation_count: usize,
}

impl ContextCues {
    pub(crate) fn from_text(raw: &str, normalized: &str) -> Self {
        let has_any =
            |list: &[&str]| normalized.split_whitespace().any(|token| list.contains(&token));
        ContextCues {
            has_negation: has_any(NEGATION_WORDS),
            has_intensifier: has_any(INTENSIFIER_WORDS),
            has_question: raw.contains('?'),
            exclamation_count: raw.chars().filter(|&c| c == '!').count(),
        }
    }
}

type Modifier = fn(f32, &ContextCues) -> f32;

/// The fixed pipeline order. Changing it changes scores.
const PIPELINE: &[Modifier] = &[negation, intensifier, question, exclamation];

/// Apply all modifiers in order, then clamp to `[0, 1]`.
pub(crate) fn apply(base: f32, cues: &ContextCues) -> f32 {
    PIPELINE
        .iter()
        .fold(base, |score, step| step(score, cues))
        .clamp(0.0, 1.0)
}

/// A single inversion regardless of how many negation words are present.
fn negation(score: f32, cues: &ContextCues) -> f32 {
    if cues.has_negation {
        1.0 - score
    } else {
        score
    }
}

fn intensifier(score: f32, cues: &ContextCues) -> f32 {
    if !cues.has_intensifier {
        return score;
    }
    if score > 0.5 {
        (score * 1.2).min(1.0)
    } else {
        (score * 0.8).max(0.0)
    }
}

/// Questions read as uncertainty; pull halfway toward neutral.
fn question(score: f32, cues: &ContextCues) -> f32 {
    if cues.has_question {
        (score + 0.5) / 2.0
    } else {
        score
    }
}

/// Push away from 0.5 by 0.1 per exclamation mark, capped at 0.2.
fn exclamation(score: f32, cues: &ContextCues) -> f32 {
    if cues.exclamation_count == 0 {
        return score;
    }
    #[allow(clippy::cast_precision_loss)]
    let intensity = (cues.exclamation_count as f32 * 0.1).min(0.2);
    if score > 0.5 {
        score + intensity
    } else if score < 0.5 {
        score - intensity
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_cues() -> ContextCues {
        ContextCues {
            has_negation: false,
            has_intensifier: false,
            has_question: false,
            exclamation_count: 0,
        }
    }

    #[test]
    fn no_cues_leaves_score_unchanged() {
        assert_eq!(apply(0.7, &no_cues()), 0.7);
    }

    #[test]
    fn negation_inverts_once() {
        let cues = ContextCues {
            has_negation: true,
            ..no_cues()
        };
        let score = apply(0.9, &cues);
        assert!((score - 0.1).abs() < 1e-6, "expected ~0.1, got {score}");
    }

    #[test]
    fn intensifier_amplifies_above_half() {
        let cues = ContextCues {
            has_intensifier: true,
            ..no_cues()
        };
        let score = apply(0.7, &cues);
        assert!((score - 0.84).abs() < 1e-6, "expected ~0.84, got {score}");
    }

    #[test]
    fn intensifier_dampens_below_half() {
        let cues = ContextCues {
            has_intensifier: true,
            ..no_cues()
        };
        let score = apply(0.3, &cues);
        assert!((score - 0.24).abs() < 1e-6, "expected ~0.24, got {score}");
    }

    #[test]
    fn intensifier_caps_at_one() {
        let cues = ContextCues {
            has_intensifier: true,
            ..no_cues()
        };
        assert_eq!(apply(0.9, &cues), 1.0);
    }

    #[test]
    fn question_pulls_toward_neutral() {
        let cues = ContextCues {
            has_question: true,
            ..no_cues()
        };
        let score = apply(0.9, &cues);
        assert!((score - 0.7).abs() < 1e-6, "expected ~0.7, got {score}");
    }

    #[test]
    fn exclamation_pushes_away_from_neutral() {
        let up = ContextCues {
            exclamation_count: 1,
            ..no_cues()
        };
        let score = apply(0.7, &up);
        assert!((score - 0.8).abs() < 1e-6, "expected ~0.8, got {score}");

        let score = apply(0.3, &up);
        assert!((score - 0.2).abs() < 1e-6, "expected ~0.2, got {score}");
    }

    #[test]
    fn exclamation_intensity_caps_at_point_two() {
        let many = ContextCues {
            exclamation_count: 5,
            ..no_cues()
        };
        let score = apply(0.6, &many);
        assert!((score - 0.8).abs() < 1e-6, "expected ~0.8, got {score}");
    }

    #[test]
    fn exclamation_leaves_exact_neutral_alone() {
        let cues = ContextCues {
            exclamation_count: 3,
            ..no_cues()
        };
        assert_eq!(apply(0.5, &cues), 0.5);
    }

    #[test]
    fn negation_runs_before_intensifier() {
        // 0.9 inverted to 0.1, then dampened to 0.08. The other order would
        // amplify first (1.0) and invert to 0.0.
        let cues = ContextCues {
            has_negation: true,
            has_intensifier: true,
            ..no_cues()
        };
        let score = apply(0.9, &cues);
        assert!((score - 0.08).abs() < 1e-6, "expected ~0.08, got {score}");
    }

    #[test]
    fn result_is_clamped() {
        let cues = ContextCues {
            exclamation_count: 2,
            ..no_cues()
        };
        assert_eq!(apply(0.95, &cues), 1.0);
        assert_eq!(apply(0.05, &cues), 0.0);
    }

    #[test]
    fn cues_from_text_detects_word_and_punctuation_cues() {
        let raw = "Is this really not good?!";
        let cues = ContextCues::from_text(raw, "is this really not good");
        assert!(cues.has_negation);
        assert!(cues.has_intensifier);
        assert!(cues.has_question);
        assert_eq!(cues.exclamation_count, 1);
    }

    #[test]
    fn cues_match_whole_tokens_only() {
        // "knot" contains "not" and "notably" starts with it; neither is a cue.
        let cues = ContextCues::from_text("knot notably", "knot notably");
        assert!(!cues.has_negation);
    }
}
