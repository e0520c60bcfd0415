use async_trait::async_trait;
use aws_sdk_polly::Client as PollyClient;
use aws_sdk_polly::types::{OutputFormat, VoiceId};

use crate::errors::RelayError;

/// MIME type of the audio every synthesizer in this crate produces.
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Text to audio transcoding with a fixed voice and codec.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesizes `text`, returning MP3 bytes.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, RelayError>;
}

/// Amazon Polly synthesizer using the `Joanna` voice and MP3 output.
pub struct PollySynthesizer {
    client: PollyClient,
    voice_id: VoiceId,
}

impl PollySynthesizer {
    #[must_use]
    pub fn new(client: PollyClient) -> Self {
        Self {
            client,
            voice_id: VoiceId::Joanna,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for PollySynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, RelayError> {
        let response = self
            .client
            .synthesize_speech()
            .text(text)
            .output_format(OutputFormat::Mp3)
            .voice_id(self.voice_id.clone())
            .send()
            .await
            .map_err(|e| RelayError::SynthesisError(format!("polly synthesize_speech: {e}")))?;

        let audio = response
            .audio_stream
            .collect()
            .await
            .map_err(|e| RelayError::SynthesisError(format!("polly audio stream: {e}")))?;

        Ok(audio.into_bytes().to_vec())
    }
}
