//! Batch scoring from a file.

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use clap::ValueEnum;
use echosense_sentiment::{
    analyze_batch, filter_by_label, high_confidence, sentiment_distribution, SentimentLabel,
};

/// Minimum confidence for the high-confidence summary count.
const HIGH_CONFIDENCE_FLOOR: f32 = 0.8;

/// Default confidence floor for the `--label` filter.
pub(crate) const DEFAULT_MIN_CONFIDENCE: f32 = 0.6;

/// Label filter accepted by `batch --label`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum LabelArg {
    Positive,
    Negative,
    Neutral,
}

impl From<LabelArg> for SentimentLabel {
    fn from(arg: LabelArg) -> Self {
        match arg {
            LabelArg::Positive => SentimentLabel::Positive,
            LabelArg::Negative => SentimentLabel::Negative,
            LabelArg::Neutral => SentimentLabel::Neutral,
        }
    }
}

/// Score one text per line from `input` and print a report.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or JSON serialization
/// fails.
pub(crate) async fn run_batch(
    input: &Path,
    batch_size: usize,
    label: Option<LabelArg>,
    min_confidence: f32,
    json: bool,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let texts = parse_lines(&content);

    if texts.is_empty() {
        println!("no texts to score in {}", input.display());
        return Ok(());
    }

    let results = analyze_batch(&texts, batch_size).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("generated {}", Utc::now().format("%Y-%m-%d %H:%M UTC"));
    println!();
    println!("{:<10}{:<8}{:<12}TEXT", "LABEL", "SCORE", "CONFIDENCE");
    for (text, result) in texts.iter().zip(&results) {
        let preview: String = text.chars().take(48).collect();
        println!(
            "{:<10}{:<8.3}{:<12.3}{preview}",
            result.label, result.score, result.confidence
        );
    }

    let dist = sentiment_distribution(&results);
    let confident = high_confidence(&results, HIGH_CONFIDENCE_FLOOR).len();
    println!();
    println!(
        "positive {:.1}%  negative {:.1}%  neutral {:.1}%",
        dist.positive, dist.negative, dist.neutral
    );
    println!(
        "{confident} of {} results at confidence >= {HIGH_CONFIDENCE_FLOOR}",
        results.len()
    );
    if let Some(arg) = label {
        let wanted = SentimentLabel::from(arg);
        let matching = filter_by_label(&results, wanted, min_confidence);
        println!(
            "{} of {} results are {wanted} at confidence >= {min_confidence}",
            matching.len(),
            results.len()
        );
    }

    Ok(())
}

/// Split file content into non-empty trimmed lines.
fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
