//! In-memory stand-ins for the AWS services, shared by the integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tts_relay::RelayError;
use tts_relay::clients::{Notifier, ObjectStore, ObjectUpload, SpeechSynthesizer};
use tts_relay::core::RelayContext;
use tts_relay::core::config::AppConfig;

pub const INPUT_BUCKET: &str = "tts-input";
pub const OUTPUT_BUCKET: &str = "tts-output";
pub const TOPIC_ARN: &str = "arn:aws:sns:us-east-1:123456789012:tts-complete";
pub const ORIGIN: &str = "https://app.example.com";

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: Option<&'static str>,
    pub owner_full_control: bool,
}

#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    failing_gets: Mutex<HashSet<String>>,
    failing_puts: Mutex<HashSet<String>>,
    presign_fails: Mutex<bool>,
    presign_count: Mutex<u64>,
}

impl MemoryStore {
    pub fn insert(&self, bucket: &str, key: &str, body: &[u8]) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body: body.to_vec(),
                content_type: None,
                owner_full_control: false,
            },
        );
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn text(&self, bucket: &str, key: &str) -> Option<String> {
        self.object(bucket, key)
            .map(|o| String::from_utf8(o.body).unwrap())
    }

    pub fn keys(&self, bucket: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .objects
            .lock()
            .unwrap()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect();
        keys.sort();
        keys
    }

    pub fn fail_get(&self, key: &str) {
        self.failing_gets.lock().unwrap().insert(key.to_string());
    }

    pub fn fail_put(&self, key: &str) {
        self.failing_puts.lock().unwrap().insert(key.to_string());
    }

    pub fn fail_presign(&self) {
        *self.presign_fails.lock().unwrap() = true;
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, RelayError> {
        if self.failing_gets.lock().unwrap().contains(key) {
            return Err(RelayError::StorageError(format!("AccessDenied: {bucket}/{key}")));
        }
        self.object(bucket, key)
            .map(|o| o.body)
            .ok_or_else(|| RelayError::StorageError(format!("NoSuchKey: {bucket}/{key}")))
    }

    async fn put_object(&self, upload: ObjectUpload) -> Result<(), RelayError> {
        if self.failing_puts.lock().unwrap().contains(&upload.key) {
            return Err(RelayError::StorageError(format!(
                "SlowDown: {}/{}",
                upload.bucket, upload.key
            )));
        }
        self.objects.lock().unwrap().insert(
            (upload.bucket, upload.key),
            StoredObject {
                body: upload.body,
                content_type: upload.content_type,
                owner_full_control: upload.owner_full_control,
            },
        );
        Ok(())
    }

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, RelayError> {
        if *self.presign_fails.lock().unwrap() {
            return Err(RelayError::PresignError("no credentials".to_string()));
        }
        let mut count = self.presign_count.lock().unwrap();
        *count += 1;
        Ok(format!(
            "https://{bucket}.s3.amazonaws.com/{key}?X-Amz-Expires={}&n={}",
            expires_in.as_secs(),
            *count
        ))
    }
}

/// Produces deterministic "audio" derived from the input text.
#[derive(Default)]
pub struct FakeSynthesizer {
    fail: Mutex<bool>,
    calls: Mutex<Vec<String>>,
}

impl FakeSynthesizer {
    pub fn audio_for(text: &str) -> Vec<u8> {
        format!("ID3:{text}").into_bytes()
    }

    pub fn fail(&self) {
        *self.fail.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, RelayError> {
        self.calls.lock().unwrap().push(text.to_string());
        if *self.fail.lock().unwrap() {
            return Err(RelayError::SynthesisError("ServiceUnavailable".to_string()));
        }
        Ok(Self::audio_for(text))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub topic: String,
    pub subject: String,
    pub message: String,
}

#[derive(Default)]
pub struct RecordingNotifier {
    fail: Mutex<bool>,
    published: Mutex<Vec<Published>>,
}

impl RecordingNotifier {
    pub fn fail(&self) {
        *self.fail.lock().unwrap() = true;
    }

    pub fn published(&self) -> Vec<Published> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<(), RelayError> {
        if *self.fail.lock().unwrap() {
            return Err(RelayError::NotificationError("AuthorizationError".to_string()));
        }
        self.published.lock().unwrap().push(Published {
            topic: topic.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

pub struct Harness {
    pub ctx: RelayContext,
    pub store: Arc<MemoryStore>,
    pub speech: Arc<FakeSynthesizer>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn test_config() -> AppConfig {
    AppConfig {
        input_bucket: INPUT_BUCKET.to_string(),
        output_bucket: OUTPUT_BUCKET.to_string(),
        sns_topic_arn: TOPIC_ARN.to_string(),
        allowed_origin: ORIGIN.to_string(),
    }
}

pub fn harness() -> Harness {
    let store = Arc::new(MemoryStore::default());
    let speech = Arc::new(FakeSynthesizer::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let ctx = RelayContext::new(
        test_config(),
        store.clone(),
        speech.clone(),
        notifier.clone(),
    );

    Harness {
        ctx,
        store,
        speech,
        notifier,
    }
}
