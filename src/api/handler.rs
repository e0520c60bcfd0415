//! Lambda handler - thin router that classifies the trigger and delegates.
//!
//! This module handles:
//! - CORS preflight
//! - S3 upload notifications (delegated to `conversion::upload`)
//! - Direct text submissions (delegated to `conversion::submission`)
//! - Mapping every outcome to a response envelope

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Map, Value, json};
use tracing::{error, info, warn};

use super::helpers;
use super::parsing::{self, SubmissionBody, Trigger};
use crate::conversion::{self, SubmissionOutcome};
use crate::core::RelayContext;
use crate::errors::RelayError;

pub const S3_EVENT_PROCESSED: &str = "S3 event processed successfully.";
pub const CONVERSION_SUCCEEDED: &str = "Audio conversion successful.";
pub const CONVERSION_FAILED: &str = "Failed to generate audio file. Please try again later.";
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";
pub const MISSING_TEXT: &str = "Missing 'text' in request body";
pub const INVALID_TRIGGER: &str = "Invalid trigger source";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

pub use self::function_handler as handler;

/// Lambda handler for the relay entrypoint.
///
/// # Errors
///
/// Never fails for a well-formed invocation; every outcome, including
/// internal failures, is returned as a response envelope.
#[tracing::instrument(level = "info", skip(ctx, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    ctx: &RelayContext,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_event(ctx, &event.payload).await)
}

/// Routes a decoded event payload and returns its response envelope.
pub async fn handle_event(ctx: &RelayContext, payload: &Value) -> Value {
    info!("Received event: {}", payload);
    let origin = ctx.config.allowed_origin.as_str();

    match parsing::classify(payload) {
        Trigger::Preflight => helpers::preflight(origin),
        Trigger::MethodNotAllowed(method) => {
            warn!(method = %method, "Unsupported method");
            helpers::err_response(origin, 405, METHOD_NOT_ALLOWED)
        }
        Trigger::BatchUpload(records) => {
            // Per-record failures are logged inside the batch and never fail it.
            conversion::process_batch(ctx, &records).await;
            helpers::create_response(origin, 200, S3_EVENT_PROCESSED, None)
        }
        Trigger::DirectSubmission(body) => match handle_submission(ctx, &body).await {
            Ok(response) => response,
            Err(e) => {
                error!("Unhandled error in POST handler: {}", e);
                helpers::err_response(origin, 500, &e.to_string())
            }
        },
        Trigger::Unrecognized => {
            warn!("POST carried neither upload records nor a body");
            helpers::create_response(origin, 400, INVALID_TRIGGER, None)
        }
    }
}

async fn handle_submission(ctx: &RelayContext, body: &SubmissionBody) -> Result<Value, RelayError> {
    let origin = ctx.config.allowed_origin.as_str();

    let submission = match parsing::parse_submission(body) {
        Ok(submission) => submission,
        Err(RelayError::MissingText) => {
            return Ok(helpers::create_response(origin, 400, MISSING_TEXT, None));
        }
        Err(e) if e.is_validation() => {
            warn!("Error parsing body: {}", e);
            return Ok(helpers::create_response(origin, 400, INVALID_JSON_BODY, None));
        }
        Err(e) => return Err(e),
    };

    match conversion::submit_text(ctx, &submission).await? {
        SubmissionOutcome::Converted { url, name } => {
            let mut data = Map::new();
            data.insert("url".into(), json!(url.as_str()));
            data.insert("name".into(), json!(name));
            Ok(helpers::create_response(
                origin,
                200,
                CONVERSION_SUCCEEDED,
                Some(data),
            ))
        }
        SubmissionOutcome::ConversionFailed => {
            Ok(helpers::create_response(origin, 500, CONVERSION_FAILED, None))
        }
    }
}
