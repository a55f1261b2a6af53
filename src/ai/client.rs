//! Inference service client.
//!
//! [`InferenceClient`] is the seam between the handler and Bedrock: the
//! Lambda builds one [`BedrockInferenceClient`] at cold start and shares it
//! across invocations, tests substitute their own implementation.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::config::{Builder as BedrockConfigBuilder, Region};
use aws_sdk_bedrockruntime::primitives::Blob;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Provider-neutral `InvokeModel` envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeRequest {
    pub model_id: String,
    pub content_type: String,
    pub accept: String,
    pub body: Vec<u8>,
}

impl InvokeRequest {
    /// JSON request for `model_id` with a serialized body.
    #[must_use]
    pub fn json(model_id: &str, body: Vec<u8>) -> Self {
        Self {
            model_id: model_id.to_string(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            accept: JSON_CONTENT_TYPE.to_string(),
            body,
        }
    }
}

/// Capability to send one request to the inference service.
///
/// Implementations hold no per-request state and are shared between
/// concurrent invocations.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends `request` and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns `SummarizerError::Upstream` on network, auth, throttling or
    /// service failures.
    async fn send(&self, request: InvokeRequest) -> Result<Vec<u8>, SummarizerError>;
}

/// Amazon Bedrock runtime client.
#[derive(Debug, Clone)]
pub struct BedrockInferenceClient {
    client: Client,
}

impl BedrockInferenceClient {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Loads AWS credentials from the environment and builds a client for the
    /// configured region, honouring an optional endpoint override.
    pub async fn from_config(config: &AppConfig) -> Self {
        let shared_config = aws_config::from_env()
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = BedrockConfigBuilder::from(&shared_config);
        if let Some(endpoint) = &config.endpoint_url {
            info!(endpoint = %endpoint, "Using Bedrock endpoint override");
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl InferenceClient for BedrockInferenceClient {
    async fn send(&self, request: InvokeRequest) -> Result<Vec<u8>, SummarizerError> {
        debug!(
            model_id = %request.model_id,
            body_bytes = request.body.len(),
            "Invoking Bedrock model"
        );

        let output = self
            .client
            .invoke_model()
            .model_id(request.model_id)
            .content_type(request.content_type)
            .accept(request.accept)
            .body(Blob::new(request.body))
            .send()
            .await?;

        Ok(output.body.into_inner())
    }
}
