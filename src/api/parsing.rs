//! Decodes an inbound Lambda event into the path that should handle it.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;

use crate::core::events::{S3_EVENT_SOURCE, S3EventRecord};
use crate::core::models::{Submission, SubmissionRequest};
use crate::errors::RelayError;

/// The body of a direct submission as it arrived on the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionBody {
    /// `None` when `body` is present but not a string (usually `null`).
    pub raw: Option<String>,
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone)]
pub enum Trigger {
    /// CORS preflight (`OPTIONS`).
    Preflight,
    /// S3 upload notification carrying one or more records.
    BatchUpload(Vec<S3EventRecord>),
    /// `POST` with a request body.
    DirectSubmission(SubmissionBody),
    /// A method other than `POST` or `OPTIONS`; empty when none was given.
    MethodNotAllowed(String),
    /// `POST` carrying neither upload records nor a body.
    Unrecognized,
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of a REST API (`httpMethod`) or HTTP API v2
/// (`requestContext.http.method`) proxy event, upper-cased.
#[must_use]
pub fn request_method(event: &Value) -> Option<String> {
    v_str(event, &["httpMethod"])
        .or_else(|| v_str(event, &["requestContext", "http", "method"]))
        .map(str::to_ascii_uppercase)
}

/// Returns the upload records if the event's first record comes from S3.
fn s3_records(event: &Value) -> Option<Vec<S3EventRecord>> {
    let records = event.get("Records")?.as_array()?;
    let first_source = records.first()?.get("eventSource")?.as_str()?;
    if first_source != S3_EVENT_SOURCE {
        return None;
    }

    Some(
        records
            .iter()
            .map(|r| serde_json::from_value(r.clone()).unwrap_or_default())
            .collect(),
    )
}

/// Classifies an inbound event.
///
/// Raw S3 notifications carry no HTTP method and are accepted as uploads, as
/// are uploads relayed through a `POST`.
#[must_use]
pub fn classify(event: &Value) -> Trigger {
    let method = request_method(event);

    if method.as_deref() == Some("OPTIONS") {
        return Trigger::Preflight;
    }

    if matches!(method.as_deref(), None | Some("POST")) {
        if let Some(records) = s3_records(event) {
            return Trigger::BatchUpload(records);
        }
    }

    if method.as_deref() != Some("POST") {
        return Trigger::MethodNotAllowed(method.unwrap_or_default());
    }

    match event.get("body") {
        Some(body) => Trigger::DirectSubmission(SubmissionBody {
            raw: body.as_str().map(ToString::to_string),
            is_base64_encoded: event
                .get("isBase64Encoded")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }),
        None => Trigger::Unrecognized,
    }
}

/// Decodes and validates a direct submission body.
///
/// # Errors
///
/// Returns `InvalidBody` if the body is missing, not valid base64/UTF-8 when
/// flagged as encoded, or not a JSON object of the expected shape; returns
/// `MissingText` if `text` is absent or empty.
pub fn parse_submission(body: &SubmissionBody) -> Result<Submission, RelayError> {
    let Some(raw) = body.raw.as_deref() else {
        return Err(RelayError::InvalidBody("body is not a string".to_string()));
    };

    let decoded;
    let json_text = if body.is_base64_encoded {
        let bytes = BASE64
            .decode(raw)
            .map_err(|e| RelayError::InvalidBody(format!("base64: {e}")))?;
        decoded =
            String::from_utf8(bytes).map_err(|e| RelayError::InvalidBody(format!("utf-8: {e}")))?;
        decoded.as_str()
    } else {
        raw
    };

    let request: SubmissionRequest =
        serde_json::from_str(json_text).map_err(|e| RelayError::InvalidBody(e.to_string()))?;

    Submission::try_from(request)
}
