use std::sync::Arc;

use bedrock_summarizer::ai::BedrockInferenceClient;
use bedrock_summarizer::api::{Summarizer, handler};
use bedrock_summarizer::core::config::AppConfig;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    bedrock_summarizer::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(
        region = %config.region,
        model_id = %config.model_id,
        stage = config.stage_name.as_deref().unwrap_or("unset"),
        "Starting summarizer API"
    );

    let client = BedrockInferenceClient::from_config(&config).await;
    let summarizer = Summarizer::new(config, Arc::new(client))?;
    let summarizer = &summarizer;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(summarizer, event).await
    }))
    .await
}
