//! Fixed word lists backing the heuristic scorer.
//!
//! All entries are lowercase single words. The sentiment lists only contain
//! words longer than two characters, matching the token-length filter in
//! [`crate::scorer`]; negation and intensifier cues are matched without that
//! filter.

use crate::emotion::Emotion;

/// Words counted with weight 1 toward the positive score.
pub(crate) const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "love",
    "loved",
    "fantastic",
    "awesome",
    "perfect",
    "best",
    "happy",
    "wonderful",
    "impressive",
    "recommend",
    "quality",
    "reliable",
    "smooth",
    "helpful",
    "brilliant",
    "outstanding",
];

/// Words counted with weight 1 toward the negative score.
pub(crate) const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "horrible",
    "worst",
    "disappointing",
    "broken",
    "poor",
    "useless",
    "slow",
    "buggy",
    "defective",
    "refund",
    "scam",
    "annoying",
    "overpriced",
    "failure",
    "failed",
    "waste",
];

/// Words counted with weight 0.5; they signal engagement without polarity.
pub(crate) const NEUTRAL_WORDS: &[&str] = &[
    "okay",
    "fine",
    "average",
    "decent",
    "normal",
    "standard",
    "typical",
    "regular",
    "ordinary",
    "moderate",
];

/// Negation cues. Presence of any one inverts the score exactly once.
pub(crate) const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "nor", "hardly", "barely", "scarcely",
];

/// Intensifier cues. Presence of any one amplifies the score away from 0.5.
pub(crate) const INTENSIFIER_WORDS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "absolutely",
    "totally",
    "completely",
    "incredibly",
    "highly",
    "super",
    "truly",
];

/// Keyword lists per emotion category, in declaration order.
pub(crate) const EMOTION_LEXICONS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Joy,
        &[
            "happy",
            "joy",
            "delighted",
            "excited",
            "glad",
            "cheerful",
            "thrilled",
            "pleased",
            "love",
            "enjoy",
        ],
    ),
    (
        Emotion::Anger,
        &[
            "angry",
            "furious",
            "mad",
            "outraged",
            "annoyed",
            "irritated",
            "hate",
            "rage",
            "resent",
            "hostile",
        ],
    ),
    (
        Emotion::Fear,
        &[
            "afraid",
            "scared",
            "fear",
            "worried",
            "anxious",
            "nervous",
            "terrified",
            "panic",
            "dread",
            "alarmed",
        ],
    ),
    (
        Emotion::Sadness,
        &[
            "sad",
            "unhappy",
            "depressed",
            "miserable",
            "disappointed",
            "heartbroken",
            "gloomy",
            "sorrow",
            "grief",
            "upset",
        ],
    ),
    (
        Emotion::Surprise,
        &[
            "surprised",
            "shocked",
            "astonished",
            "amazed",
            "stunned",
            "unexpected",
            "sudden",
            "wow",
            "startled",
            "unbelievable",
        ],
    ),
    (
        Emotion::Trust,
        &[
            "trust",
            "dependable",
            "honest",
            "loyal",
            "faithful",
            "credible",
            "secure",
            "confident",
            "assured",
            "trustworthy",
        ],
    ),
];
