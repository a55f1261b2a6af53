use std::env;
use std::str::FromStr;

use super::models::GenerationParams;
use crate::ai::adapter::adapter_for_model;
use crate::errors::SummarizerError;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "*";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub region: String,
    pub model_id: String,
    pub endpoint_url: Option<String>,
    pub allowed_origin: String,
    pub stage_name: Option<String>,
    pub generation: GenerationParams,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            endpoint_url: None,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            stage_name: None,
            generation: GenerationParams::default(),
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `SummarizerError::Config` if an override cannot be parsed, a
    /// sampling value is out of range, or the model id has no prompt adapter.
    pub fn from_env() -> Result<Self, SummarizerError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AppConfig::from_env`].
    pub fn from_vars<F>(lookup: F) -> Result<Self, SummarizerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = GenerationParams::default();

        let config = Self {
            region: var("BEDROCK_REGION")
                .or_else(|| var("AWS_REGION"))
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            model_id: var("BEDROCK_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            endpoint_url: var("BEDROCK_ENDPOINT_URL"),
            allowed_origin: var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            stage_name: var("STAGE_NAME"),
            generation: GenerationParams {
                max_tokens: parse_or(&var, "SUMMARY_MAX_TOKENS", defaults.max_tokens)?,
                temperature: parse_or(&var, "SUMMARY_TEMPERATURE", defaults.temperature)?,
                top_p: parse_or(&var, "SUMMARY_TOP_P", defaults.top_p)?,
                top_k: parse_or(&var, "SUMMARY_TOP_K", defaults.top_k)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SummarizerError> {
        let params = &self.generation;
        if params.max_tokens == 0 {
            return Err(SummarizerError::Config(
                "SUMMARY_MAX_TOKENS must be greater than zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&params.temperature) {
            return Err(SummarizerError::Config(format!(
                "SUMMARY_TEMPERATURE must be within [0, 1], got {}",
                params.temperature
            )));
        }
        if !(0.0..=1.0).contains(&params.top_p) {
            return Err(SummarizerError::Config(format!(
                "SUMMARY_TOP_P must be within [0, 1], got {}",
                params.top_p
            )));
        }
        if adapter_for_model(&self.model_id).is_none() {
            return Err(SummarizerError::Config(format!(
                "BEDROCK_MODEL_ID {} is not a supported model family",
                self.model_id
            )));
        }
        Ok(())
    }
}

fn parse_or<T>(
    var: &dyn Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, SummarizerError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match var(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| SummarizerError::Config(format!("{key}: {e}"))),
        None => Ok(default),
    }
}
