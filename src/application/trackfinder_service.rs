// Track finder service - runs the centerline pipeline for each camera observation
use std::sync::Arc;

use crate::common::{ApplicationError, ApplicationResult, DomainResult};
use crate::config::ServiceConfig;
use crate::domains::centerline::{
    CenterlineMessage, InboundMessage, InboundSource, Marker, Path, PathPublisher, TrackFinder,
    VehiclePositionStore,
};
use crate::domains::DynLogger;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceStats {
    pub observations: u64,
    pub location_updates: u64,
    pub published: u64,
    pub failed_observations: u64,
    pub rejected_messages: u64,
}

pub struct TrackFinderService {
    finder: TrackFinder,
    vehicle: VehiclePositionStore,
    publisher: Arc<dyn PathPublisher>,
    logger: DynLogger,
    config: ServiceConfig,
    stats: ServiceStats,
}

impl TrackFinderService {
    pub fn new(
        finder: TrackFinder,
        vehicle: VehiclePositionStore,
        publisher: Arc<dyn PathPublisher>,
        logger: DynLogger,
        config: ServiceConfig,
    ) -> Self {
        Self {
            finder,
            vehicle,
            publisher,
            logger,
            config,
            stats: ServiceStats::default(),
        }
    }

    /// Shared handle; other tasks may feed positions through a clone.
    pub fn vehicle(&self) -> &VehiclePositionStore {
        &self.vehicle
    }

    pub fn stats(&self) -> &ServiceStats {
        &self.stats
    }

    /// Trace the boundary, then read the vehicle position once and order the
    /// candidates from it.
    pub fn process_observation(&self, markers: &[Marker]) -> DomainResult<Path> {
        let trace = self.finder.trace(markers)?;
        let vehicle = self.vehicle.latest();
        Ok(self.finder.order(trace, vehicle))
    }

    /// Handle one inbound message to completion. Returns the published
    /// centerline, if any. Only transport failures are returned as errors.
    pub async fn handle(
        &mut self,
        message: InboundMessage,
    ) -> ApplicationResult<Option<CenterlineMessage>> {
        match message {
            InboundMessage::Location(location) => {
                self.vehicle.update(location.location);
                self.stats.location_updates += 1;
                Ok(None)
            }
            InboundMessage::Cones(cones) => {
                self.stats.observations += 1;
                let outcome = cones
                    .into_markers()
                    .and_then(|markers| self.process_observation(&markers));

                let path = match outcome {
                    Ok(path) => path,
                    Err(e) => {
                        self.stats.failed_observations += 1;
                        self.logger
                            .warn(&format!("Observation {} dropped: {}", self.stats.observations, e));
                        if !self.config.publish_empty_on_failure {
                            return Ok(None);
                        }
                        Path::empty()
                    }
                };

                let message = CenterlineMessage::new(path);
                self.publisher
                    .publish(&message)
                    .await
                    .map_err(ApplicationError::Transport)?;
                self.stats.published += 1;
                tracing::debug!(
                    observation_id = %message.observation_id,
                    points = message.points.len(),
                    "centerline published"
                );
                Ok(Some(message))
            }
        }
    }

    /// Drain the source. Failures are logged per message and never stop the loop.
    pub async fn run<S>(&mut self, source: &mut S) -> ServiceStats
    where
        S: InboundSource + ?Sized,
    {
        self.logger.info("Track finder service started");

        while let Some(item) = source.next_message().await {
            match item {
                Ok(message) => {
                    if let Err(e) = self.handle(message).await {
                        self.logger.error(&format!("Failed to handle message: {}", e));
                    }
                }
                Err(e) => {
                    self.stats.rejected_messages += 1;
                    self.logger.warn(&format!("Rejected inbound message: {}", e));
                }
            }
        }

        self.logger.info(&format!(
            "Track finder service stopped after {} observations ({} published, {} failed)",
            self.stats.observations, self.stats.published, self.stats.failed_observations
        ));
        self.stats.clone()
    }
}
