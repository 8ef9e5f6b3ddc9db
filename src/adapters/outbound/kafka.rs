use crate::config::KafkaConfig;
use crate::domains::centerline::{CenterlineMessage, PathPublisher};
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use std::time::Duration;

pub struct KafkaPathPublisher {
    producer: FutureProducer,
    topic: String,
}

impl KafkaPathPublisher {
    pub fn new(config: &KafkaConfig) -> Result<Self, String> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", config.brokers.join(","))
            .set("client.id", &config.client_id)
            .set("message.timeout.ms", "5000")
            .create()
            .map_err(|e| format!("Failed to create Kafka producer: {}", e))?;

        Ok(Self {
            producer,
            topic: config.topics.centerline.clone(),
        })
    }
}

#[async_trait]
impl PathPublisher for KafkaPathPublisher {
    async fn publish(&self, message: &CenterlineMessage) -> Result<(), String> {
        let key = message.observation_id.to_string();
        let payload = serde_json::to_string(message)
            .map_err(|e| format!("Failed to serialize centerline: {}", e))?;

        let record = FutureRecord::to(&self.topic).key(&key).payload(&payload);

        self.producer
            .send(record, Duration::from_secs(5))
            .await
            .map_err(|(e, _)| format!("Failed to send centerline to Kafka: {}", e))?;

        Ok(())
    }
}
