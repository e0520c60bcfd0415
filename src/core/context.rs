use std::sync::Arc;

use tracing::info;

use super::config::AppConfig;
use crate::clients::{
    Notifier, ObjectStore, PollySynthesizer, S3ObjectStore, SnsNotifier, SpeechSynthesizer,
};
use crate::errors::RelayError;

/// Everything a single invocation needs: configuration plus handles to the
/// storage, synthesis and notification services. Built once per process and
/// shared by reference across invocations.
#[derive(Clone)]
pub struct RelayContext {
    pub config: AppConfig,
    pub storage: Arc<dyn ObjectStore>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    pub notifier: Arc<dyn Notifier>,
}

impl RelayContext {
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn ObjectStore>,
        speech: Arc<dyn SpeechSynthesizer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            storage,
            speech,
            notifier,
        }
    }

    /// Loads configuration from the environment and builds AWS-backed clients
    /// from the default credential and region chain.
    ///
    /// # Errors
    ///
    /// Returns an error if any required environment variable is missing.
    pub async fn from_env() -> Result<Self, RelayError> {
        let config = AppConfig::from_env()?;
        let shared = aws_config::from_env().load().await;
        info!(
            input_bucket = %config.input_bucket,
            output_bucket = %config.output_bucket,
            region = ?shared.region(),
            "Initialized AWS clients"
        );

        Ok(Self::new(
            config,
            Arc::new(S3ObjectStore::new(aws_sdk_s3::Client::new(&shared))),
            Arc::new(PollySynthesizer::new(aws_sdk_polly::Client::new(&shared))),
            Arc::new(SnsNotifier::new(aws_sdk_sns::Client::new(&shared))),
        ))
    }
}
