use tracing::{error, info};

use crate::clients::ObjectUpload;
use crate::clients::speech::AUDIO_CONTENT_TYPE;
use crate::core::RelayContext;
use crate::core::models::{LINK_EXPIRY, NotificationMessage, RetrievalLink, audio_record_key};
use crate::errors::RelayError;

/// Converts `text` to audio stored as `{name}.mp3` and announces it.
///
/// Failures while synthesizing, storing the audio or presigning its link are
/// logged and reported as `Ok(None)`; the caller cannot tell which stage
/// failed. A failure to publish the completion notice is returned as an error.
///
/// # Errors
///
/// Returns `NotificationError` if the completion notice cannot be published.
pub async fn synthesize_text(
    ctx: &RelayContext,
    text: &str,
    name: &str,
) -> Result<Option<RetrievalLink>, RelayError> {
    let link = match store_audio(ctx, text, name).await {
        Ok(link) => link,
        Err(e) => {
            error!(name = %name, "Error during text-to-speech conversion: {}", e);
            return Ok(None);
        }
    };

    let note = NotificationMessage::conversion_complete(name, &link);
    ctx.notifier
        .publish(&ctx.config.sns_topic_arn, &note.subject, &note.message)
        .await?;
    info!(name = %name, "SNS notification sent for {}", audio_record_key(name));

    Ok(Some(link))
}

async fn store_audio(
    ctx: &RelayContext,
    text: &str,
    name: &str,
) -> Result<RetrievalLink, RelayError> {
    let bucket = &ctx.config.output_bucket;
    let key = audio_record_key(name);

    let audio = ctx.speech.synthesize(text).await?;

    let upload = ObjectUpload::new(bucket, &key, audio)
        .with_content_type(AUDIO_CONTENT_TYPE)
        .with_owner_full_control();
    ctx.storage.put_object(upload).await?;
    info!("Audio saved to {}/{}", bucket, key);

    let url = ctx.storage.presign_get(bucket, &key, LINK_EXPIRY).await?;
    info!(key = %key, expires_in_secs = LINK_EXPIRY.as_secs(), "Presigned URL generated");

    Ok(RetrievalLink(url))
}
