//! Per-model-family request and response shapes for Bedrock `InvokeModel`.
//!
//! Each family expects a different JSON body and returns its generated text
//! under a different path. A [`PromptAdapter`] hides both behind one
//! interface so the handler never branches on the model.

use std::sync::Arc;

use serde_json::{Value, json};

use crate::core::models::GenerationParams;
use crate::errors::SummarizerError;
use crate::utils::json::{v_path, v_str};

const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Cross-region inference profile prefixes that precede the provider name.
const INFERENCE_PROFILE_PREFIXES: &[&str] = &["us", "eu", "apac", "us-gov", "global"];

pub trait PromptAdapter: Send + Sync {
    /// Short family name, used in logs.
    fn family(&self) -> &'static str;

    /// Builds the provider request body for `prompt`.
    fn build_body(&self, prompt: &str, params: &GenerationParams) -> Value;

    /// Pulls the generated text out of a decoded provider response.
    ///
    /// # Errors
    ///
    /// Returns `SummarizerError::ResponseShape` when the expected field is
    /// missing, has the wrong type, or is blank.
    fn extract_text(&self, response: &Value) -> Result<String, SummarizerError>;
}

/// Anthropic Claude via the Messages API.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnthropicMessagesAdapter;

impl PromptAdapter for AnthropicMessagesAdapter {
    fn family(&self) -> &'static str {
        "anthropic"
    }

    fn build_body(&self, prompt: &str, params: &GenerationParams) -> Value {
        json!({
            "anthropic_version": ANTHROPIC_VERSION,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
            "top_p": params.top_p,
            "top_k": params.top_k,
        })
    }

    fn extract_text(&self, response: &Value) -> Result<String, SummarizerError> {
        let blocks = v_path(response, &["content"])
            .and_then(Value::as_array)
            .ok_or_else(|| {
                SummarizerError::ResponseShape("missing 'content' array".to_string())
            })?;

        let text = blocks
            .iter()
            .find_map(|block| block.get("text").and_then(Value::as_str))
            .ok_or_else(|| {
                SummarizerError::ResponseShape("no text block in 'content'".to_string())
            })?;

        non_blank(text, "content[].text")
    }
}

/// Meta Llama 3 instruct models (flat completion shape).
#[derive(Debug, Default, Clone, Copy)]
pub struct LlamaAdapter;

impl LlamaAdapter {
    fn instruct_prompt(prompt: &str) -> String {
        format!(
            "<|begin_of_text|><|start_header_id|>user<|end_header_id|>\n\n{prompt}<|eot_id|>\
             <|start_header_id|>assistant<|end_header_id|>\n\n"
        )
    }
}

impl PromptAdapter for LlamaAdapter {
    fn family(&self) -> &'static str {
        "meta"
    }

    fn build_body(&self, prompt: &str, params: &GenerationParams) -> Value {
        json!({
            "prompt": Self::instruct_prompt(prompt),
            "max_gen_len": params.max_tokens,
            "temperature": params.temperature,
            "top_p": params.top_p,
        })
    }

    fn extract_text(&self, response: &Value) -> Result<String, SummarizerError> {
        let text = v_str(response, &["generation"]).ok_or_else(|| {
            SummarizerError::ResponseShape("missing 'generation' string".to_string())
        })?;
        non_blank(text, "generation")
    }
}

/// Mistral instruct models (flat completion shape).
#[derive(Debug, Default, Clone, Copy)]
pub struct MistralAdapter;

impl PromptAdapter for MistralAdapter {
    fn family(&self) -> &'static str {
        "mistral"
    }

    fn build_body(&self, prompt: &str, params: &GenerationParams) -> Value {
        json!({
            "prompt": format!("<s>[INST] {prompt} [/INST]"),
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
            "top_p": params.top_p,
        })
    }

    fn extract_text(&self, response: &Value) -> Result<String, SummarizerError> {
        let text = v_path(response, &["outputs"])
            .and_then(Value::as_array)
            .and_then(|outputs| outputs.first())
            .and_then(|first| first.get("text"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                SummarizerError::ResponseShape("missing 'outputs[0].text' string".to_string())
            })?;
        non_blank(text, "outputs[0].text")
    }
}

fn non_blank(text: &str, field: &str) -> Result<String, SummarizerError> {
    if text.trim().is_empty() {
        return Err(SummarizerError::ResponseShape(format!("'{field}' is empty")));
    }
    Ok(text.to_string())
}

/// Provider segment of a Bedrock model id, skipping any inference profile
/// prefix (`us.anthropic.claude-...` -> `anthropic`).
#[must_use]
pub fn model_provider(model_id: &str) -> Option<&str> {
    let mut segments = model_id.split('.');
    let first = segments.next().filter(|s| !s.is_empty())?;
    if INFERENCE_PROFILE_PREFIXES.contains(&first) {
        segments.next().filter(|s| !s.is_empty())
    } else {
        Some(first)
    }
}

/// Selects the adapter for a model id, or `None` if the family is unsupported.
#[must_use]
pub fn adapter_for_model(model_id: &str) -> Option<Arc<dyn PromptAdapter>> {
    match model_provider(model_id)? {
        "anthropic" => Some(Arc::new(AnthropicMessagesAdapter)),
        "meta" => Some(Arc::new(LlamaAdapter)),
        "mistral" => Some(Arc::new(MistralAdapter)),
        _ => None,
    }
}
