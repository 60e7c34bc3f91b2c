//! Object Store Client
//!
//! Bucket/key-addressed binary blob fetches. The production implementation
//! wraps the AWS S3 SDK; handlers only see the [`ObjectStore`] trait.

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors from object store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The GET request itself failed: object missing, access denied, or
    /// store unreachable.
    #[error("object store request failed: {0}")]
    Request(String),

    /// The object was found but its body could not be read.
    #[error("failed to read object body: {0}")]
    Read(String),
}

/// Bucket/key-addressed read access to binary objects.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the raw bytes stored at `(bucket, key)`.
    ///
    /// One attempt, no retry; the caller maps any failure straight to a
    /// server-error response.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError>;
}

/// S3-backed object store.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    /// Wrap an already-configured S3 client.
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    #[instrument(skip(self), fields(bucket = %bucket, key = %key))]
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| StorageError::Request(DisplayErrorContext(&err).to_string()))?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|err| StorageError::Read(err.to_string()))?;

        let bytes = body.into_bytes().to_vec();
        debug!(size = bytes.len(), "fetched object from store");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_messages_carry_the_cause() {
        let err = StorageError::Request("NoSuchKey: the key does not exist".to_string());
        assert_eq!(
            err.to_string(),
            "object store request failed: NoSuchKey: the key does not exist"
        );
    }
}
