//! tts-relay - A Lambda function that turns submitted text into speech.
//!
//! Text arrives either as a JSON `POST` through API Gateway or as a `.txt`
//! object uploaded to the input bucket. Each text is synthesized with Amazon
//! Polly, the MP3 is written to the output bucket, a presigned link to it is
//! generated, and an SNS topic is told the conversion finished.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - S3 for text input and audio output
//! - Polly for speech synthesis
//! - SNS for completion notices
//! - Tokio for async runtime
//!
//! The three AWS services sit behind the `ObjectStore`, `SpeechSynthesizer`
//! and `Notifier` traits, so the handler can be driven with any implementation.
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use tts_relay::core::RelayContext;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     tts_relay::setup_logging();
//!
//!     // Requires INPUT_BUCKET, OUTPUT_BUCKET, SNS_TOPIC_ARN and ALLOWED_ORIGIN
//!     let ctx = RelayContext::from_env().await?;
//!
//!     let event = json!({
//!         "httpMethod": "POST",
//!         "body": "{\"text\":\"Hello world\",\"filename\":\"greeting\"}"
//!     });
//!     let response = tts_relay::api::handle_event(&ctx, &event).await;
//!     println!("{}", response["body"]);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod clients;
pub mod conversion;
pub mod core;
pub mod errors;

pub use errors::RelayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level comes from `RUST_LOG` and defaults
/// to `info`. Calling it more than once leaves the first subscriber in place.
///
/// # Example
///
/// ```
/// tts_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
