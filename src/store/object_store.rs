use anyhow::Result;
use async_trait::async_trait;

/// The slice of the object-store collaborator this worker needs. Production
/// code wraps the AWS SDK client; tests substitute a recording double.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;
}
