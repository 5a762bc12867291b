//! Concurrent batch scoring.

use futures::future::join_all;

use crate::scorer::analyze_sentiment;
use crate::types::ScoreResult;

/// Score a sequence of texts, `batch_size` items at a time.
///
/// Items within a batch run on concurrent blocking tasks; batches run
/// sequentially. Results come back in input order regardless of how tasks
/// interleave. An empty input returns an empty vector, and a `batch_size` of
/// zero is treated as one. A task that fails to join degrades to the neutral
/// default result rather than surfacing an error.
pub async fn analyze_batch(texts: &[String], batch_size: usize) -> Vec<ScoreResult> {
    if texts.is_empty() {
        return Vec::new();
    }
    let batch_size = batch_size.max(1);
    tracing::info!(count = texts.len(), batch_size, "scoring texts");

    let mut results = Vec::with_capacity(texts.len());
    for chunk in texts.chunks(batch_size) {
        let handles: Vec<_> = chunk
            .iter()
            .cloned()
            .map(|text| tokio::task::spawn_blocking(move || analyze_sentiment(&text)))
            .collect();

        for joined in join_all(handles).await {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::warn!(error = %e, "scoring task failed; substituting neutral default");
                    results.push(ScoreResult::neutral_default());
                }
            }
        }
    }

    tracing::info!(count = results.len(), "batch scoring complete");
    results
}
