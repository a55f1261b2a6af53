#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bedrock_summarizer::ai::{InferenceClient, InvokeRequest};
use bedrock_summarizer::api::Summarizer;
use bedrock_summarizer::core::config::AppConfig;
use bedrock_summarizer::errors::SummarizerError;
use serde_json::{Value, json};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Canned reply returned by [`FakeInferenceClient`].
#[derive(Debug, Clone)]
pub enum Reply {
    Body(Vec<u8>),
    Fail(String),
}

/// Stand-in for Bedrock that records every request it receives.
#[derive(Debug)]
pub struct FakeInferenceClient {
    reply: Reply,
    requests: Mutex<Vec<InvokeRequest>>,
}

impl FakeInferenceClient {
    pub fn replying(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn with_json(body: &Value) -> Arc<Self> {
        Self::replying(Reply::Body(body.to_string().into_bytes()))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::replying(Reply::Fail(message.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<InvokeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for FakeInferenceClient {
    async fn send(&self, request: InvokeRequest) -> Result<Vec<u8>, SummarizerError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Body(bytes) => Ok(bytes.clone()),
            Reply::Fail(message) => Err(SummarizerError::Upstream(message.clone())),
        }
    }
}

pub fn claude_reply(text: &str) -> Value {
    json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn"
    })
}

pub fn summarizer_with(config: AppConfig, client: Arc<FakeInferenceClient>) -> Summarizer {
    Summarizer::new(config, client).unwrap()
}

/// API Gateway REST proxy event carrying `body`.
pub fn post_event(body: &str) -> Value {
    json!({
        "resource": "/v1/analysis",
        "path": "/v1/analysis",
        "httpMethod": "POST",
        "headers": { "Content-Type": "application/json" },
        "body": body,
        "isBase64Encoded": false
    })
}

pub fn status(response: &Value) -> u64 {
    response["statusCode"].as_u64().unwrap()
}

pub fn body(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}

/// Tracing layer that counts ERROR-level events.
#[derive(Debug, Clone, Default)]
pub struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}
