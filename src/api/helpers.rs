//! Response builders for API Gateway proxy responses.
//!
//! Every response carries the same CORS headers so browsers can call the
//! endpoint directly.

use serde_json::{Value, json};

use crate::core::models::SummarizationResult;

pub const ALLOWED_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const ALLOWED_METHODS: &str = "OPTIONS,POST";

#[must_use]
pub fn cors_headers(allowed_origin: &str) -> Value {
    json!({
        "Access-Control-Allow-Origin": allowed_origin,
        "Access-Control-Allow-Headers": ALLOWED_HEADERS,
        "Access-Control-Allow-Methods": ALLOWED_METHODS,
        "Content-Type": "application/json",
    })
}

/// Returns a response with the given status and a serialized JSON body.
#[must_use]
pub fn json_response(status_code: u16, allowed_origin: &str, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(allowed_origin),
        "body": body.to_string(),
    })
}

/// Returns a 200 OK response wrapping the generated summary.
#[must_use]
pub fn ok_summary(allowed_origin: &str, summary: &str) -> Value {
    let result = SummarizationResult::Summary(summary.to_string());
    json_response(200, allowed_origin, &json!(result))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, allowed_origin: &str, message: &str) -> Value {
    let result = SummarizationResult::Error(message.to_string());
    json_response(status_code, allowed_origin, &json!(result))
}

/// Returns a 204 response for CORS preflight requests.
#[must_use]
pub fn preflight(allowed_origin: &str) -> Value {
    json!({
        "statusCode": 204,
        "headers": cors_headers(allowed_origin),
        "body": "",
    })
}
