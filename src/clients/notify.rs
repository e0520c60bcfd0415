use async_trait::async_trait;
use aws_sdk_sns::Client as SnsClient;

use crate::errors::RelayError;

/// Fire-and-forget publish to a fan-out topic.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<(), RelayError>;
}

pub struct SnsNotifier {
    client: SnsClient,
}

impl SnsNotifier {
    #[must_use]
    pub fn new(client: SnsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<(), RelayError> {
        self.client
            .publish()
            .topic_arn(topic)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| RelayError::NotificationError(format!("sns publish: {e}")))?;
        Ok(())
    }
}
