//! Response builders shared by every handler path.
//!
//! Every envelope carries the same CORS headers so browsers calling the
//! endpoint from the configured origin can read the result, including errors.

use serde_json::{Map, Value, json};

pub const ALLOW_METHODS: &str = "POST,OPTIONS";
pub const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

// ============================================================================
// Headers
// ============================================================================

/// Returns the fixed CORS header set for `allowed_origin`.
#[must_use]
pub fn cors_headers(allowed_origin: &str) -> Map<String, Value> {
    let mut headers = Map::new();
    headers.insert("Access-Control-Allow-Origin".into(), json!(allowed_origin));
    headers.insert("Access-Control-Allow-Methods".into(), json!(ALLOW_METHODS));
    headers.insert("Access-Control-Allow-Headers".into(), json!(ALLOW_HEADERS));
    headers
}

fn json_headers(allowed_origin: &str) -> Map<String, Value> {
    let mut headers = cors_headers(allowed_origin);
    headers.insert("Content-Type".into(), json!("application/json"));
    headers
}

// ============================================================================
// Response Builders
// ============================================================================

/// Returns the preflight response: 200, CORS headers, empty body.
#[must_use]
pub fn preflight(allowed_origin: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(allowed_origin),
        "body": ""
    })
}

/// Returns a response whose body is `{"message": message}` merged with the
/// fields of `data`, if any. A `message` field in `data` replaces `message`.
#[must_use]
pub fn create_response(
    allowed_origin: &str,
    status_code: u16,
    message: &str,
    data: Option<Map<String, Value>>,
) -> Value {
    let mut body = Map::new();
    body.insert("message".into(), json!(message));
    body.extend(data.unwrap_or_default());

    json!({
        "statusCode": status_code,
        "headers": json_headers(allowed_origin),
        "body": Value::Object(body).to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(allowed_origin: &str, status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": json_headers(allowed_origin),
        "body": json!({ "error": message }).to_string()
    })
}
