/// Bedrock Summarizer - an API Gateway Lambda that summarizes free-form text
/// with a foundation model hosted on Amazon Bedrock.
///
/// A single `POST /v1/analysis` endpoint accepts `{"data": "<text>"}`, builds a
/// summarization prompt, invokes the configured model once, and returns
/// `{"summary": "<text>"}`. Failures map to fixed JSON error bodies.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (`lambda_runtime`) for serverless execution behind API Gateway
/// - `aws-sdk-bedrockruntime` for model invocation
/// - One `PromptAdapter` per model family to shape requests and read replies
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use bedrock_summarizer::ai::BedrockInferenceClient;
/// use bedrock_summarizer::api::Summarizer;
/// use bedrock_summarizer::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     bedrock_summarizer::setup_logging();
///
///     let config = AppConfig::default();
///     let client = BedrockInferenceClient::from_config(&config).await;
///     let summarizer = Summarizer::new(config, Arc::new(client))?;
///
///     let summary = summarizer.summarize("cluster1 has 3 nodes").await?;
///     println!("Summary: {summary}");
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod utils;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level comes from `RUST_LOG` and defaults
/// to `info`. Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// bedrock_summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
