//! Capability interfaces for the managed services the relay depends on,
//! with their AWS-backed implementations.

pub mod notify;
pub mod speech;
pub mod storage;

pub use notify::{Notifier, SnsNotifier};
pub use speech::{PollySynthesizer, SpeechSynthesizer};
pub use storage::{ObjectStore, ObjectUpload, S3ObjectStore};
