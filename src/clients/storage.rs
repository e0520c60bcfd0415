use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use tracing::debug;

use crate::errors::RelayError;

/// A blob to be written to object storage.
#[derive(Debug, Clone)]
pub struct ObjectUpload {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: Option<&'static str>,
    /// Grants the bucket owner full control over the written object.
    pub owner_full_control: bool,
}

impl ObjectUpload {
    #[must_use]
    pub fn new(bucket: &str, key: &str, body: Vec<u8>) -> Self {
        Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body,
            content_type: None,
            owner_full_control: false,
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = Some(content_type);
        self
    }

    #[must_use]
    pub fn with_owner_full_control(mut self) -> Self {
        self.owner_full_control = true;
        self
    }
}

/// Durable key-value blob storage.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, RelayError>;

    async fn put_object(&self, upload: ObjectUpload) -> Result<(), RelayError>;

    /// Returns a URL that allows an unauthenticated GET of the object until
    /// `expires_in` has elapsed.
    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, RelayError>;
}

pub struct S3ObjectStore {
    client: S3Client,
}

impl S3ObjectStore {
    #[must_use]
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, RelayError> {
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| RelayError::StorageError(format!("s3 get_object {bucket}/{key}: {e}")))?;

        let data = resp
            .body
            .collect()
            .await
            .map_err(|e| RelayError::StorageError(format!("s3 read body {bucket}/{key}: {e}")))?;

        Ok(data.into_bytes().to_vec())
    }

    async fn put_object(&self, upload: ObjectUpload) -> Result<(), RelayError> {
        let ObjectUpload {
            bucket,
            key,
            body,
            content_type,
            owner_full_control,
        } = upload;
        debug!(bucket = %bucket, key = %key, bytes = body.len(), "Writing object");

        let mut req = self
            .client
            .put_object()
            .bucket(&bucket)
            .key(&key)
            .body(ByteStream::from(body));
        if let Some(content_type) = content_type {
            req = req.content_type(content_type);
        }
        if owner_full_control {
            req = req.acl(ObjectCannedAcl::BucketOwnerFullControl);
        }

        req.send()
            .await
            .map_err(|e| RelayError::StorageError(format!("s3 put_object {bucket}/{key}: {e}")))?;
        Ok(())
    }

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, RelayError> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| RelayError::PresignError(format!("presigning config: {e}")))?;

        let request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| RelayError::PresignError(format!("s3 presign {bucket}/{key}: {e}")))?;

        Ok(request.uri().to_string())
    }
}
