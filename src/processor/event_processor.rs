use crate::event::{CleanupEvent, DeleteKey, EventType, S3Uri};
use crate::executor::DeletionExecutor;
use crate::store::ObjectStore;

use super::ProcessingError;

/// Turns one raw message payload into zero or more deletions. Every failure
/// mode is logged and absorbed here; the consumption loop never sees an
/// error from a bad message.
pub struct EventProcessor<S> {
    executor: DeletionExecutor<S>,
}

impl<S: ObjectStore> EventProcessor<S> {
    pub const fn new(executor: DeletionExecutor<S>) -> Self {
        Self { executor }
    }

    pub async fn process(&self, payload: &[u8]) {
        let keys = match derive_delete_keys_from_payload(payload) {
            Ok(keys) => keys,
            Err(e) => {
                log::error!("{e}. Skipping message.");
                return;
            }
        };

        for key in &keys {
            self.executor.delete(key).await;
        }
    }
}

fn derive_delete_keys_from_payload(payload: &[u8]) -> Result<Vec<DeleteKey>, ProcessingError> {
    let event: CleanupEvent = serde_json::from_slice(payload)?;
    derive_delete_keys(&event)
}

/// Enumerates the objects one event targets, in deletion order: type-derived
/// keys first (frame indices ascending, `.jpg` before `.webp`), download-link
/// key last.
fn derive_delete_keys(event: &CleanupEvent) -> Result<Vec<DeleteKey>, ProcessingError> {
    let raw_uri = event
        .get_image_uri()
        .ok_or(ProcessingError::MissingRequiredField("image_uri"))?;
    let raw_type = event
        .get_raw_type()
        .ok_or(ProcessingError::MissingRequiredField("type"))?;

    let primary = S3Uri::parse(raw_uri).map_err(|source| ProcessingError::InvalidImageUri {
        uri: raw_uri.to_string(),
        source,
    })?;

    let mut keys = Vec::new();
    match EventType::parse(raw_type) {
        Some(EventType::Static) => {
            keys.push(DeleteKey::new(
                primary.get_bucket().to_string(),
                primary.get_key_prefix().to_string(),
            ));
        }
        Some(EventType::Spherical) => {
            for i in 0..event.effective_frame_count() {
                for ext in ["jpg", "webp"] {
                    keys.push(DeleteKey::new(
                        primary.get_bucket().to_string(),
                        join_key(primary.get_key_prefix(), &format!("{i}.{ext}")),
                    ));
                }
            }
        }
        None => {
            log::error!("Unknown type: {raw_type}");
        }
    }

    // A bad download link must not discard the deletions derived above.
    if let Some(link) = event.get_dl_link() {
        match S3Uri::parse(link) {
            Ok(target) => keys.push(DeleteKey::new(
                target.get_bucket().to_string(),
                target.get_key_prefix().to_string(),
            )),
            Err(e) => log::error!("Failed to process dl_link: {e}"),
        }
    }

    Ok(keys)
}

fn join_key(prefix: &str, file_name: &str) -> String {
    if prefix.ends_with('/') {
        format!("{prefix}{file_name}")
    } else {
        format!("{prefix}/{file_name}")
    }
}
