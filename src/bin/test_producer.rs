use std::time::Duration;

use anyhow::{Context, Result};
use rdkafka::producer::{FutureProducer, FutureRecord};
use serde_json::json;

use kafka_image_cleaner::kafka_listener::KafkaParams;

/// Publishes one sample cleanup event so the worker can be exercised end to
/// end against a real broker.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let params = KafkaParams::from_env()?;

    let producer: FutureProducer = params
        .client_config()
        .set("message.timeout.ms", "25000")
        .create()
        .context("Failed to create Kafka producer")?;

    let message = json!({
        "image_uri": "s3://your-bucket/images/product123",
        "type": "360",
        "frames": 3,
    });
    let payload = serde_json::to_string(&message)?;

    producer
        .send(
            FutureRecord::<(), _>::to(params.get_topic()).payload(&payload),
            Duration::from_secs(25),
        )
        .await
        .map_err(|(e, _)| anyhow::anyhow!("Failed to send test message: {e}"))?;

    println!("Test message sent!");
    Ok(())
}
