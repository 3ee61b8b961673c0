use anyhow::{Context, Result};
use futures::StreamExt;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::Message;

use crate::processor::EventProcessor;
use crate::store::ObjectStore;

use super::KafkaParams;

/// Single-topic consumption loop. One message is fully processed, including
/// all of its deletions, before the next one is polled.
pub struct CleanupConsumer<S> {
    consumer: StreamConsumer,
    processor: EventProcessor<S>,
}

impl<S: ObjectStore> CleanupConsumer<S> {
    pub fn new(params: &KafkaParams, processor: EventProcessor<S>) -> Result<Self> {
        let consumer: StreamConsumer = params
            .client_config()
            .set("group.id", params.get_group_id())
            // Replay the full retained backlog when the group has no
            // committed offsets yet.
            .set("auto.offset.reset", "earliest")
            .set("enable.auto.commit", "true")
            .create()
            .context("Failed to create Kafka consumer")?;

        consumer
            .subscribe(&[params.get_topic()])
            .with_context(|| format!("Failed to subscribe to topic {:?}", params.get_topic()))?;

        Ok(Self {
            consumer,
            processor,
        })
    }

    pub async fn run(&self) -> Result<()> {
        let mut stream = self.consumer.stream();
        while let Some(message) = stream.next().await {
            match message {
                Ok(msg) => {
                    log::info!("New message received from {}.", msg.topic());
                    let Some(payload) = msg.payload() else {
                        log::warn!("Received message with empty payload. Skipping.");
                        continue;
                    };
                    self.processor.process(payload).await;
                }
                Err(e) => {
                    // Transport-level errors are the client's to retry; keep
                    // consuming.
                    log::error!("Kafka consumer error: {e:?}");
                }
            }
        }
        Ok(())
    }
}
