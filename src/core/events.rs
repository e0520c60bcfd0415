//! Storage-upload notification records as delivered by S3 event triggers.

use percent_encoding::percent_decode_str;
use serde::Deserialize;

use crate::errors::RelayError;

pub const S3_EVENT_SOURCE: &str = "aws:s3";

/// One entry of an S3 notification's `Records` array. Every field is optional
/// so that a malformed record can be skipped without rejecting its siblings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3EventRecord {
    #[serde(default)]
    pub event_source: String,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub s3: Option<S3Entity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Entity {
    #[serde(default)]
    pub bucket: S3Bucket,
    #[serde(default)]
    pub object: S3Object,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Bucket {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Object {
    #[serde(default)]
    pub key: String,
}

/// Location of an uploaded object with its key already URL-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
}

impl S3EventRecord {
    #[must_use]
    pub fn is_from_s3(&self) -> bool {
        self.event_source == S3_EVENT_SOURCE
    }

    /// Resolves the bucket and decoded object key this record points at.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` if the record is not an S3 record, lacks a
    /// bucket or key, or the key is not valid percent-encoded UTF-8.
    pub fn object_ref(&self) -> Result<ObjectRef, RelayError> {
        if !self.is_from_s3() {
            return Err(RelayError::InvalidRecord(format!(
                "unexpected event source '{}'",
                self.event_source
            )));
        }
        let Some(s3) = &self.s3 else {
            return Err(RelayError::InvalidRecord("missing s3 entity".to_string()));
        };
        if s3.bucket.name.is_empty() {
            return Err(RelayError::InvalidRecord("missing bucket name".to_string()));
        }
        if s3.object.key.is_empty() {
            return Err(RelayError::InvalidRecord("missing object key".to_string()));
        }

        Ok(ObjectRef {
            bucket: s3.bucket.name.clone(),
            key: decode_object_key(&s3.object.key)?,
        })
    }
}

/// Decodes an object key from an S3 notification, where spaces arrive as `+`
/// and other reserved characters as `%XX` escapes.
///
/// # Examples
///
/// ```
/// use tts_relay::core::events::decode_object_key;
///
/// assert_eq!(decode_object_key("my+notes%281%29.txt").unwrap(), "my notes(1).txt");
/// assert_eq!(decode_object_key("a%2Bb.txt").unwrap(), "a+b.txt");
/// ```
pub fn decode_object_key(raw: &str) -> Result<String, RelayError> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| RelayError::InvalidRecord(format!("object key '{raw}': {e}")))
}
