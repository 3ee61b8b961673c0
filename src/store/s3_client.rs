use anyhow::Result;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::{config::Builder, Client};

use super::ObjectStore;

/// Builds an S3 client from the ambient credential/region chain. Set
/// `S3_ENDPOINT_URL` to target a non-AWS endpoint; path-style addressing is
/// forced in that case.
pub async fn create_s3_client() -> Client {
    let base_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let mut builder = Builder::from(&base_config);
    if let Ok(endpoint) = std::env::var("S3_ENDPOINT_URL") {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }
    Client::from_conf(builder.build())
}

pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }
}
