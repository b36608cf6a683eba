// src/storage/s3.rs

//! AWS S3 storage implementation.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;

use crate::error::{AppError, Result};
use crate::storage::BlogStorage;

/// S3-based blog storage.
pub struct S3Storage {
    client: Client,
    bucket: String,
}

impl S3Storage {
    /// Create a new S3 storage instance.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Create S3 storage from a shared SDK configuration.
    pub fn from_config(config: &aws_config::SdkConfig, bucket: impl Into<String>) -> Self {
        Self::new(Client::new(config), bucket)
    }
}

#[async_trait]
impl BlogStorage for S3Storage {
    /// Write the generated post as the body of a new object at `key`.
    async fn put_blog(&self, key: &str, content: &str) -> Result<()> {
        let body = ByteStream::from(content.as_bytes().to_vec());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type("text/plain")
            .send()
            .await
            .map_err(|e| AppError::storage(e.to_string()))?;

        info!("Saved blog to s3://{}/{}", self.bucket, key);
        Ok(())
    }
}
