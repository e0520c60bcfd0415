use tracing::{error, info, warn};

use super::synthesize::synthesize_text;
use crate::core::RelayContext;
use crate::core::events::S3EventRecord;
use crate::core::models::logical_name;
use crate::errors::RelayError;

/// Outcome counts for one batch of upload notifications.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Processes every record of an upload batch in order. A record that is
/// malformed or fails to convert is logged and does not stop the batch.
pub async fn process_batch(ctx: &RelayContext, records: &[S3EventRecord]) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for record in records {
        let object = match record.object_ref() {
            Ok(object) => object,
            Err(e) => {
                warn!("Skipping upload record: {}", e);
                summary.skipped += 1;
                continue;
            }
        };

        info!(
            event_name = record.event_name.as_deref().unwrap_or("unknown"),
            bucket = %object.bucket,
            key = %object.key,
            "Processing upload record"
        );
        match process_text_file(ctx, &object.bucket, &object.key).await {
            Ok(()) => summary.processed += 1,
            Err(e) => {
                error!("Error processing file {}: {}", object.key, e);
                summary.failed += 1;
            }
        }
    }

    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        failed = summary.failed,
        "Upload batch complete"
    );
    summary
}

/// Reads an uploaded text object and converts it to `{base name}.mp3`.
///
/// A conversion that yields no link is logged by the orchestrator and still
/// counts as handled here.
///
/// # Errors
///
/// Returns an error if the object cannot be fetched, is not UTF-8, has no
/// usable base name, or the completion notice cannot be published.
pub async fn process_text_file(
    ctx: &RelayContext,
    bucket: &str,
    key: &str,
) -> Result<(), RelayError> {
    let bytes = ctx.storage.get_object(bucket, key).await?;
    let text = String::from_utf8(bytes)?;

    let name = logical_name(key);
    if name.is_empty() {
        return Err(RelayError::InvalidRecord(format!(
            "object key '{key}' has no file name"
        )));
    }

    info!(bucket = %bucket, key = %key, "Converting uploaded text file");
    synthesize_text(ctx, &text, name).await?;
    Ok(())
}
