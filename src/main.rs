use anyhow::Result;
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, Naming};

use kafka_image_cleaner::executor::DeletionExecutor;
use kafka_image_cleaner::kafka_listener::{CleanupConsumer, KafkaParams};
use kafka_image_cleaner::processor::EventProcessor;
use kafka_image_cleaner::store::{create_s3_client, S3ObjectStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    Logger::try_with_env_or_str("info")
        .unwrap()
        .log_to_file(
            FileSpec::default()
                .directory("logs")
                .basename("activity")
                .suffix("log"),
        )
        .duplicate_to_stdout(Duplicate::All)
        .rotate(
            Criterion::Size(10_000_000),
            Naming::Numbers,
            Cleanup::KeepLogFiles(7),
        )
        .use_utc()
        .format(flexi_logger::detailed_format)
        .start()
        .expect("failed to initialize logging");

    let kafka_params = KafkaParams::from_env()?;

    // AWS credentials come from the environment or the shared config files.
    let s3_client = create_s3_client().await;
    let executor = DeletionExecutor::new(S3ObjectStore::new(s3_client));
    let processor = EventProcessor::new(executor);

    let consumer = CleanupConsumer::new(&kafka_params, processor)?;
    log::info!(
        "Kafka consumer running on topic {:?}.",
        kafka_params.get_topic()
    );
    consumer.run().await
}
