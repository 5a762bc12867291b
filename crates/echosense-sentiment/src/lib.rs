//! Heuristic sentiment scoring for EchoSense brand monitoring.
//!
//! A pure lexicon scorer: text normalization, weighted keyword matching, and
//! an ordered context-modifier pipeline (negation, intensifiers,
//! punctuation), plus concurrent batch scoring, keyword-frequency
//! extraction, emotion detection, and aggregate analytics.
//!
//! Scoring never fails. Malformed or empty input degrades to documented
//! neutral defaults instead of raising errors; the only fallible surfaces in
//! the workspace are configuration loading and CLI I/O.

pub mod analytics;
pub mod batch;
pub mod emotion;
pub mod keywords;
pub mod preprocess;
pub mod scorer;
pub mod types;

mod lexicon;
mod modifiers;

pub use analytics::{
    filter_by_label, high_confidence, sentiment_distribution, SentimentDistribution,
};
pub use batch::analyze_batch;
pub use emotion::{detect_emotions, Emotion, EmotionResult};
pub use keywords::extract_keywords;
pub use scorer::analyze_sentiment;
pub use types::{ScoreResult, SentimentLabel};
