use tracing::info;

use super::synthesize::synthesize_text;
use crate::clients::ObjectUpload;
use crate::core::RelayContext;
use crate::core::models::{RetrievalLink, Submission, audio_record_key, text_record_key};
use crate::errors::RelayError;

const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Audio stored; `name` is the audio record key.
    Converted { url: RetrievalLink, name: String },
    /// Synthesis, storage or presigning failed; details are only logged.
    ConversionFailed,
}

/// Stores the submitted text as `{filename}.txt` in the input bucket, then
/// converts it to audio.
///
/// # Errors
///
/// Returns an error if the text record cannot be written or the completion
/// notice cannot be published.
pub async fn submit_text(
    ctx: &RelayContext,
    submission: &Submission,
) -> Result<SubmissionOutcome, RelayError> {
    let bucket = &ctx.config.input_bucket;
    let key = text_record_key(&submission.filename);

    let upload = ObjectUpload::new(bucket, &key, submission.text.as_bytes().to_vec())
        .with_content_type(TEXT_CONTENT_TYPE);
    ctx.storage.put_object(upload).await?;
    info!("Uploaded text to {}/{}", bucket, key);

    Ok(
        match synthesize_text(ctx, &submission.text, &submission.filename).await? {
            Some(url) => SubmissionOutcome::Converted {
                url,
                name: audio_record_key(&submission.filename),
            },
            None => SubmissionOutcome::ConversionFailed,
        },
    )
}
