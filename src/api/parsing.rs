use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde_json::Value;

use crate::core::models::SummarizationRequest;
use crate::errors::SummarizerError;
use crate::utils::json::v_str;

/// HTTP method of a proxy event (REST `httpMethod` or HTTP API
/// `requestContext.http.method`), upper-cased.
pub fn http_method(payload: &Value) -> Option<String> {
    v_str(payload, &["httpMethod"])
        .or_else(|| v_str(payload, &["requestContext", "http", "method"]))
        .map(str::to_ascii_uppercase)
}

/// Returns the request body as text, decoding it first when API Gateway
/// marked it as base64.
///
/// # Errors
///
/// Returns `SummarizerError::MalformedRequest` if the body is absent, not a
/// string, or not valid base64/UTF-8 when flagged as encoded.
pub fn extract_body(payload: &Value) -> Result<String, SummarizerError> {
    let Some(body) = payload.get("body").filter(|b| !b.is_null()) else {
        return Err(SummarizerError::MalformedRequest(
            "request has no body".to_string(),
        ));
    };

    let Some(body_str) = body.as_str() else {
        return Err(SummarizerError::MalformedRequest(
            "request body is not a string".to_string(),
        ));
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(body_str.to_string());
    }

    let bytes = STANDARD.decode(body_str).map_err(|e| {
        SummarizerError::MalformedRequest(format!("invalid base64 body: {e}"))
    })?;
    String::from_utf8(bytes)
        .map_err(|e| SummarizerError::MalformedRequest(format!("body is not UTF-8: {e}")))
}

/// Parses a raw body into a validated [`SummarizationRequest`].
///
/// # Errors
///
/// `MalformedRequest` if the body is not JSON, `Validation` if `data` is
/// missing or not a string.
pub fn parse_summarization_request(body: &str) -> Result<SummarizationRequest, SummarizerError> {
    let json: Value = serde_json::from_str(body)
        .map_err(|e| SummarizerError::MalformedRequest(format!("invalid JSON body: {e}")))?;

    // A derived struct visitor also accepts sequences, so only objects qualify
    if !json.is_object() {
        return Err(SummarizerError::Validation(
            "body is not a JSON object".to_string(),
        ));
    }

    SummarizationRequest::deserialize(&json)
        .map_err(|e| SummarizerError::Validation(format!("'data' must be a string: {e}")))
}
