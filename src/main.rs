use std::error::Error;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trackfinder_app::adapters::inbound::KafkaInboundSource;
use trackfinder_app::adapters::outbound::{
    init_combined_logger, init_console_logger, KafkaPathPublisher,
};
use trackfinder_app::application::TrackFinderService;
use trackfinder_app::domains::centerline::{TrackFinder, VehiclePositionStore};
use trackfinder_app::Config;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)?;

    // Domain logger first: fast_log claims the `log` facade, tracing stays separate.
    let logger = match &config.logging.file {
        Some(path) => init_combined_logger(path, config.logging.level_filter()),
        None => init_console_logger(),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting track finder");
    info!("Kafka brokers: {:?}", config.kafka.brokers);
    info!(
        "Topics: cones={}, location={}, centerline={}",
        config.kafka.topics.cones, config.kafka.topics.location, config.kafka.topics.centerline
    );

    let mut source = KafkaInboundSource::new(&config.kafka)?;
    let publisher = Arc::new(KafkaPathPublisher::new(&config.kafka)?);

    let mut service = TrackFinderService::new(
        TrackFinder::new(config.classifier.clone()),
        VehiclePositionStore::new(),
        publisher,
        logger.clone(),
        config.service.clone(),
    );

    tokio::select! {
        stats = service.run(&mut source) => {
            error!("Inbound stream ended unexpectedly: {:?}", stats);
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutting down track finder");
        }
    }

    logger.info("Track finder stopped");
    Ok(())
}
