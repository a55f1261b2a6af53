use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

/// Message returned to callers for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// Message returned when the `data` field is missing or not a string.
pub const INVALID_DATA_MESSAGE: &str = "Invalid input. 'data' property must be a string.";

/// Message returned when the body cannot be read as a JSON object.
pub const MALFORMED_BODY_MESSAGE: &str = "Invalid request body. Expected a JSON object.";

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Malformed request body: {0}")]
    MalformedRequest(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Failed to invoke inference service: {0}")]
    Upstream(String),

    #[error("Unexpected inference response shape: {0}")]
    ResponseShape(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SummarizerError {
    /// HTTP status code this failure maps to at the handler boundary.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizerError::MalformedRequest(_) | SummarizerError::Validation(_) => 400,
            SummarizerError::Upstream(_)
            | SummarizerError::ResponseShape(_)
            | SummarizerError::Config(_) => 500,
        }
    }

    /// Caller-facing message. Internal detail never appears here.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            SummarizerError::MalformedRequest(_) => MALFORMED_BODY_MESSAGE,
            SummarizerError::Validation(_) => INVALID_DATA_MESSAGE,
            _ => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(error: serde_json::Error) -> Self {
        SummarizerError::ResponseShape(format!("Model output is not valid JSON: {error}"))
    }
}

// Generic implementation for Bedrock runtime SDK errors
impl<E, R> From<SdkError<E, R>> for SummarizerError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        SummarizerError::Upstream(format!("{}", DisplayErrorContext(&error)))
    }
}
