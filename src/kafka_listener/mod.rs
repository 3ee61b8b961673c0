mod consumer;
mod params;

pub use consumer::CleanupConsumer;
pub use params::{KafkaParams, SaslParams};
