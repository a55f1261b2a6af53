use serde::{Deserialize, Serialize};

/// Validated body of a summarization request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummarizationRequest {
    pub data: String,
}

/// Outcome returned to the caller. Serializes to exactly one of
/// `{"summary": ..}` or `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizationResult {
    Summary(String),
    Error(String),
}

/// Sampling controls sent with every inference call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.3,
            top_p: 0.8,
            top_k: 150,
        }
    }
}
