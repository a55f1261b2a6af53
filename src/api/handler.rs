//! Summarization endpoint handler.
//!
//! This module handles:
//! - Method routing (CORS preflight, POST only)
//! - Body extraction and `data` validation
//! - Prompt construction and model invocation through the configured adapter
//! - Mapping every failure to a stable JSON error response

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::ai::{InferenceClient, InvokeRequest, PromptAdapter, adapter_for_model};
use crate::core::config::AppConfig;
use crate::errors::SummarizerError;
use crate::prompt::build_summary_prompt;

pub use self::function_handler as handler;

const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed.";

/// Long-lived service shared by every invocation of the Lambda.
pub struct Summarizer {
    config: AppConfig,
    client: Arc<dyn InferenceClient>,
    adapter: Arc<dyn PromptAdapter>,
}

impl Summarizer {
    /// # Errors
    ///
    /// Returns `SummarizerError::Config` if no adapter supports the configured
    /// model id.
    pub fn new(
        config: AppConfig,
        client: Arc<dyn InferenceClient>,
    ) -> Result<Self, SummarizerError> {
        let adapter = adapter_for_model(&config.model_id).ok_or_else(|| {
            SummarizerError::Config(format!(
                "no prompt adapter for model {}",
                config.model_id
            ))
        })?;

        Ok(Self {
            config,
            client,
            adapter,
        })
    }

    /// Turns one API Gateway proxy event into a proxy response.
    ///
    /// Never fails: every error becomes a 4xx/5xx response.
    pub async fn handle(&self, payload: &Value) -> Value {
        let origin = self.config.allowed_origin.as_str();

        match parsing::http_method(payload).as_deref() {
            Some("OPTIONS") => return helpers::preflight(origin),
            Some("POST") | None => {}
            Some(other) => {
                warn!(method = %other, "Rejected unsupported method");
                return helpers::err_response(405, origin, METHOD_NOT_ALLOWED_MESSAGE);
            }
        }

        match self.process(payload).await {
            Ok(summary) => helpers::ok_summary(origin, &summary),
            Err(e) => {
                let status = e.status_code();
                if status >= 500 {
                    error!(error = %e, status, "Failed to summarize request");
                } else {
                    warn!(error = %e, status, "Rejected request");
                }
                helpers::err_response(status, origin, e.public_message())
            }
        }
    }

    async fn process(&self, payload: &Value) -> Result<String, SummarizerError> {
        let body = parsing::extract_body(payload)?;
        let request = parsing::parse_summarization_request(&body)?;
        self.summarize(&request.data).await
    }

    /// Summarizes `data` with a single call to the inference service.
    ///
    /// # Errors
    ///
    /// `Upstream` if the call fails, `ResponseShape` if the reply does not
    /// carry the expected text.
    pub async fn summarize(&self, data: &str) -> Result<String, SummarizerError> {
        let prompt = build_summary_prompt(data);

        #[cfg(feature = "debug-logs")]
        info!("Using summary prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(prompt_chars = prompt.chars().count(), "Built summary prompt");

        let body = self.adapter.build_body(&prompt, &self.config.generation);
        let request = InvokeRequest::json(&self.config.model_id, body.to_string().into_bytes());

        let raw = self.client.send(request).await?;

        let decoded = String::from_utf8(raw).map_err(|e| {
            SummarizerError::ResponseShape(format!("model output is not UTF-8: {e}"))
        })?;
        let response: Value = serde_json::from_str(&decoded)?;
        let summary = self.adapter.extract_text(&response)?;

        info!(
            model_id = %self.config.model_id,
            family = self.adapter.family(),
            summary_chars = summary.chars().count(),
            "Summary generated"
        );

        Ok(summary)
    }
}

/// Lambda entry point for the summarization API.
///
/// # Errors
///
/// Never returns `Err`; request failures are returned as error responses.
#[tracing::instrument(
    level = "info",
    skip(summarizer, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler(
    summarizer: &Summarizer,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    info!("API Lambda received request: {:?}", event.payload);
    Ok(summarizer.handle(&event.payload).await)
}
