mod object_store;
mod s3_client;

pub use object_store::ObjectStore;
pub use s3_client::{create_s3_client, S3ObjectStore};
