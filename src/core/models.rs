use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::errors::RelayError;

/// Logical name used when a submission carries no `filename`.
pub const DEFAULT_FILENAME: &str = "output";

/// How long a presigned audio link stays valid.
pub const LINK_EXPIRY: Duration = Duration::from_secs(600);

pub const NOTIFICATION_SUBJECT: &str = "Text-to-Speech Conversion Complete";

/// Raw JSON body of a direct submission, before validation.
#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    pub text: Option<String>,
    pub filename: Option<String>,
}

/// A validated submission: non-empty text plus the logical name to store it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub filename: String,
}

impl TryFrom<SubmissionRequest> for Submission {
    type Error = RelayError;

    fn try_from(request: SubmissionRequest) -> Result<Self, Self::Error> {
        let text = request
            .text
            .filter(|t| !t.is_empty())
            .ok_or(RelayError::MissingText)?;
        let filename = request
            .filename
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

        Ok(Self { text, filename })
    }
}

#[must_use]
pub fn text_record_key(name: &str) -> String {
    format!("{name}.txt")
}

#[must_use]
pub fn audio_record_key(name: &str) -> String {
    format!("{name}.mp3")
}

/// Derives the logical name of an uploaded text object: the key's base name
/// with its last extension removed. Leading dots never start an extension, so
/// `.notes` stays `.notes`.
#[must_use]
pub fn logical_name(object_key: &str) -> &str {
    let base = object_key.rsplit('/').next().unwrap_or(object_key);
    match base.rfind('.') {
        Some(idx) if !base[..idx].chars().all(|c| c == '.') => &base[..idx],
        _ => base,
    }
}

/// Time-limited URL for a stored audio record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalLink(pub String);

impl RetrievalLink {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RetrievalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Completion notice published once an audio record has been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub subject: String,
    pub message: String,
}

impl NotificationMessage {
    #[must_use]
    pub fn conversion_complete(name: &str, link: &RetrievalLink) -> Self {
        let minutes = LINK_EXPIRY.as_secs() / 60;
        Self {
            subject: NOTIFICATION_SUBJECT.to_string(),
            message: format!(
                "The text file '{}' has been converted to audio and saved as '{}'.\nAccess it here (valid {} min): {}",
                text_record_key(name),
                audio_record_key(name),
                minutes,
                link
            ),
        }
    }
}
