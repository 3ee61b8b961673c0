use crate::event::DeleteKey;
use crate::store::ObjectStore;

/// Issues delete-object calls one at a time. A failed delete is logged and
/// swallowed so the remaining keys of the same event still get their attempt;
/// there is no retry and no dead-letter.
pub struct DeletionExecutor<S> {
    store: S,
}

impl<S: ObjectStore> DeletionExecutor<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn delete(&self, target: &DeleteKey) {
        let bucket = target.get_bucket();
        let key = target.get_key();
        match self.store.delete_object(bucket, key).await {
            Ok(()) => log::info!("Deleted: s3://{bucket}/{key}"),
            Err(e) => log::error!("Failed to delete: s3://{bucket}/{key} - {e:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    use super::*;

    #[derive(Clone, Default)]
    struct AlwaysFailingStore {
        attempts: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ObjectStore for AlwaysFailingStore {
        async fn delete_object(&self, _bucket: &str, _key: &str) -> Result<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(anyhow!("access denied"))
        }
    }

    #[tokio::test]
    async fn test_failures_are_swallowed_and_do_not_stop_later_deletes() {
        let store = AlwaysFailingStore::default();
        let executor = DeletionExecutor::new(store.clone());
        executor
            .delete(&DeleteKey::new("b".into(), "p/0.jpg".into()))
            .await;
        executor
            .delete(&DeleteKey::new("b".into(), "p/0.webp".into()))
            .await;
        assert_eq!(store.attempts.load(Ordering::SeqCst), 2);
    }
}
