mod cleanup_event;
mod delete_key;
mod s3_uri;

pub use cleanup_event::{CleanupEvent, EventType};
pub use delete_key::DeleteKey;
pub use s3_uri::{InvalidUriError, S3Uri};
