use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod analyze;
mod batch;

#[derive(Debug, Parser)]
#[command(name = "echosense")]
#[command(about = "EchoSense sentiment analysis tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a single text.
    Analyze {
        text: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Score one text per line from a file.
    Batch {
        /// File with one text per line; blank lines are skipped.
        #[arg(long)]
        input: PathBuf,
        /// Texts scored concurrently per batch.
        #[arg(long)]
        batch_size: Option<usize>,
        /// Count only results with this label in the summary.
        #[arg(long, value_enum)]
        label: Option<batch::LabelArg>,
        /// Confidence floor for the `--label` count.
        #[arg(long, default_value_t = batch::DEFAULT_MIN_CONFIDENCE)]
        min_confidence: f32,
        /// Print results as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// Show emotion-category counts for a text.
    Emotions { text: String },
    /// Show the most frequent keywords in a text.
    Keywords {
        text: String,
        /// Maximum number of keywords to print.
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = echosense_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { text, json } => analyze::run_analyze(&text, json)?,
        Commands::Batch {
            input,
            batch_size,
            label,
            min_confidence,
            json,
        } => {
            let batch_size = batch_size.unwrap_or(config.sentiment_batch_size);
            batch::run_batch(&input, batch_size, label, min_confidence, json).await?;
        }
        Commands::Emotions { text } => analyze::run_emotions(&text),
        Commands::Keywords { text, limit } => {
            analyze::run_keywords(&text, limit.unwrap_or(config.keyword_limit));
        }
    }

    Ok(())
}
