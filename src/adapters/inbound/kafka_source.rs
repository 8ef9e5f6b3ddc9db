use crate::common::{ApplicationError, ApplicationResult};
use crate::config::{KafkaConfig, KafkaTopics};
use crate::domains::centerline::{ConesMessage, InboundMessage, InboundSource, LocationMessage};
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::Message;
use std::time::Duration;

/// Decode a raw payload according to the topic it arrived on.
/// Returns `Ok(None)` for topics this node does not consume.
pub fn decode_inbound(
    topics: &KafkaTopics,
    topic: &str,
    payload: &[u8],
) -> ApplicationResult<Option<InboundMessage>> {
    if topic == topics.cones {
        let cones: ConesMessage = serde_json::from_slice(payload)?;
        Ok(Some(InboundMessage::Cones(cones)))
    } else if topic == topics.location {
        let location: LocationMessage = serde_json::from_slice(payload)?;
        Ok(Some(InboundMessage::Location(location)))
    } else {
        Ok(None)
    }
}

/// Single consumer subscribed to both the camera and the location topic, so
/// both feeds are handled in arrival order on one loop.
pub struct KafkaInboundSource {
    consumer: StreamConsumer,
    topics: KafkaTopics,
}

impl KafkaInboundSource {
    pub fn new(config: &KafkaConfig) -> Result<Self, String> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", config.brokers.join(","))
            .set("group.id", &config.group_id)
            .set("client.id", &config.client_id)
            .set("enable.partition.eof", "false")
            .set("session.timeout.ms", "6000")
            .set("enable.auto.commit", "true")
            .set("auto.offset.reset", "latest")
            .create()
            .map_err(|e| format!("Failed to create Kafka consumer: {}", e))?;

        consumer
            .subscribe(&[config.topics.cones.as_str(), config.topics.location.as_str()])
            .map_err(|e| format!("Failed to subscribe to inbound topics: {}", e))?;

        tracing::info!(
            cones = %config.topics.cones,
            location = %config.topics.location,
            "subscribed to inbound topics"
        );

        Ok(Self {
            consumer,
            topics: config.topics.clone(),
        })
    }
}

#[async_trait]
impl InboundSource for KafkaInboundSource {
    async fn next_message(&mut self) -> Option<ApplicationResult<InboundMessage>> {
        loop {
            match self.consumer.recv().await {
                Ok(message) => {
                    let Some(payload) = message.payload() else {
                        continue;
                    };
                    match decode_inbound(&self.topics, message.topic(), payload) {
                        Ok(Some(inbound)) => return Some(Ok(inbound)),
                        Ok(None) => continue,
                        Err(e) => return Some(Err(e)),
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Kafka receive error");
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    return Some(Err(ApplicationError::Transport(e.to_string())));
                }
            }
        }
    }
}
