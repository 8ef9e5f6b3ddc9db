use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use std::error::Error;
use std::time::Duration;
use tracing::{info, warn};

use trackfinder_app::application::{Corridor, CorridorSettings};
use trackfinder_app::domains::centerline::{ConesMessage, LocationMessage};
use trackfinder_app::Config;

/// Camera range around the vehicle.
const VISIBILITY_RANGE: f64 = 15.0;
/// Distance travelled along the corridor per frame.
const ADVANCE_PER_FRAME: f64 = 1.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

async fn send_json<T: serde::Serialize>(
    producer: &FutureProducer,
    topic: &str,
    value: &T,
) -> Result<(), Box<dyn Error>> {
    let payload = serde_json::to_string(value)?;
    producer
        .send(FutureRecord::<(), _>::to(topic).payload(&payload), Duration::from_secs(5))
        .await
        .map_err(|(e, _)| format!("Failed to send to {}: {}", topic, e))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = Config::load(&config_path)?;

    let producer: FutureProducer = ClientConfig::new()
        .set("bootstrap.servers", config.kafka.brokers.join(","))
        .set("client.id", format!("{}-simulator", config.kafka.client_id))
        .set("message.timeout.ms", "5000")
        .create()
        .map_err(|e| format!("Failed to create Kafka producer: {}", e))?;

    let settings = CorridorSettings::default();
    let length = settings.length;
    let corridor = Corridor::generate(settings, &mut rand::thread_rng());
    info!("Generated corridor with {} cones", corridor.markers().len());

    let mut s = 0.0;
    while s <= length {
        let vehicle = corridor.center(s);
        send_json(
            &producer,
            &config.kafka.topics.location,
            &LocationMessage { location: vehicle },
        )
        .await?;

        let visible = corridor.visible_from(vehicle, VISIBILITY_RANGE);
        if visible.is_empty() {
            warn!("No cones visible at s={:.1}", s);
        }
        send_json(
            &producer,
            &config.kafka.topics.cones,
            &ConesMessage::from_markers(&visible),
        )
        .await?;
        info!(
            "Frame s={:.1}: vehicle ({:.2}, {:.2}), {} cones",
            s,
            vehicle.x,
            vehicle.y,
            visible.len()
        );

        s += ADVANCE_PER_FRAME;
        tokio::time::sleep(FRAME_INTERVAL).await;
    }

    info!("Simulation finished");
    Ok(())
}
