use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use rdkafka::ClientConfig;
use secrecy::{ExposeSecret, SecretString};

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(25);
const RETRY_INITIAL_BACKOFF: Duration = Duration::from_millis(400);
const RETRY_COUNT: u32 = 8;
const RETRY_FACTOR: u32 = 2;

/// SASL settings, populated only when SCRAM authentication is enabled.
#[derive(Debug)]
pub struct SaslParams {
    mechanism: String,
    username: String,
    password: SecretString,
}

impl SaslParams {
    pub fn new(mechanism: String, username: String, password: SecretString) -> Self {
        Self {
            mechanism,
            username,
            password,
        }
    }
}

/// Broker connection settings for both the consumer and the test producer.
/// Immutable once constructed; none of these affect processing semantics.
#[derive(Debug)]
pub struct KafkaParams {
    broker: String,
    topic: String,
    group_id: String,
    ssl: bool,
    sasl: Option<SaslParams>,
    connection_timeout: Duration,
    request_timeout: Duration,
    retry_initial_backoff: Duration,
    retry_count: u32,
    retry_factor: u32,
}

impl KafkaParams {
    pub fn new(
        broker: String,
        topic: String,
        group_id: String,
        ssl: bool,
        sasl: Option<SaslParams>,
    ) -> Self {
        Self {
            broker,
            topic,
            group_id,
            ssl,
            sasl,
            connection_timeout: CONNECTION_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
            retry_initial_backoff: RETRY_INITIAL_BACKOFF,
            retry_count: RETRY_COUNT,
            retry_factor: RETRY_FACTOR,
        }
    }

    /// Reads `KAFKA_BROKER`, `KAFKA_TOPIC` and `KAFKA_GROUP_ID` (all
    /// required), plus the `KAFKA_SSL` / `KAFKA_SASL_MECHANISM` security
    /// toggles. SASL is recognized for SCRAM-SHA-512 only and then requires
    /// `KAFKA_USERNAME` and `KAFKA_PASSWORD`.
    pub fn from_env() -> Result<Self> {
        let broker = env::var("KAFKA_BROKER").context("KAFKA_BROKER must be set")?;
        let topic = env::var("KAFKA_TOPIC").context("KAFKA_TOPIC must be set")?;
        let group_id = env::var("KAFKA_GROUP_ID").context("KAFKA_GROUP_ID must be set")?;
        let ssl = env::var("KAFKA_SSL").is_ok_and(|v| v == "enabled");
        let sasl = match env::var("KAFKA_SASL_MECHANISM") {
            Ok(mechanism) if mechanism == "SCRAM-SHA-512" => Some(SaslParams::new(
                mechanism,
                env::var("KAFKA_USERNAME")
                    .context("KAFKA_USERNAME must be set when SASL is enabled")?,
                SecretString::from(
                    env::var("KAFKA_PASSWORD")
                        .context("KAFKA_PASSWORD must be set when SASL is enabled")?,
                ),
            )),
            _ => None,
        };
        Ok(Self::new(broker, topic, group_id, ssl, sasl))
    }

    pub fn get_broker(&self) -> &str {
        &self.broker
    }

    pub fn get_topic(&self) -> &str {
        &self.topic
    }

    pub fn get_group_id(&self) -> &str {
        &self.group_id
    }

    pub fn security_protocol(&self) -> &'static str {
        match (self.ssl, self.sasl.is_some()) {
            (true, true) => "sasl_ssl",
            (true, false) => "ssl",
            (false, true) => "sasl_plaintext",
            (false, false) => "plaintext",
        }
    }

    fn max_backoff_ms(&self) -> u64 {
        self.retry_initial_backoff.as_millis() as u64
            * u64::from(self.retry_factor).pow(self.retry_count)
    }

    /// Transport settings shared by the consumer and the test producer, so
    /// the two binaries cannot drift apart.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", &self.broker)
            .set("client.id", &self.group_id)
            .set("security.protocol", self.security_protocol())
            .set(
                "socket.connection.setup.timeout.ms",
                self.connection_timeout.as_millis().to_string(),
            )
            .set(
                "socket.timeout.ms",
                self.request_timeout.as_millis().to_string(),
            )
            .set(
                "reconnect.backoff.ms",
                self.retry_initial_backoff.as_millis().to_string(),
            )
            .set("reconnect.backoff.max.ms", self.max_backoff_ms().to_string());
        if let Some(sasl) = &self.sasl {
            config
                .set("sasl.mechanism", &sasl.mechanism)
                .set("sasl.username", &sasl.username)
                .set("sasl.password", sasl.password.expose_secret());
        }
        config
    }
}
