//! Single-text inspection commands.

use echosense_sentiment::{analyze_sentiment, detect_emotions, extract_keywords};

/// Score one text and print the result.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_analyze(text: &str, json: bool) -> anyhow::Result<()> {
    let result = analyze_sentiment(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("label:      {}", result.label);
    println!("score:      {:.3}", result.score);
    println!("confidence: {:.3}", result.confidence);
    if result.keywords.is_empty() {
        println!("keywords:   (none)");
    } else {
        println!("keywords:   {}", result.keywords.join(", "));
    }
    Ok(())
}

/// Print emotion-category counts and the dominant emotion.
pub(crate) fn run_emotions(text: &str) {
    let result = detect_emotions(text);

    println!("{:<12}COUNT", "EMOTION");
    for (emotion, count) in &result.counts {
        println!("{emotion:<12}{count}");
    }
    println!();
    println!("dominant: {}", result.dominant_label());
}

/// Print the most frequent keywords, one per line.
pub(crate) fn run_keywords(text: &str, limit: usize) {
    let keywords = extract_keywords(text, limit);
    if keywords.is_empty() {
        println!("no keywords found");
        return;
    }
    for keyword in keywords {
        println!("{keyword}");
    }
}
