use super::messages::{CenterlineMessage, InboundMessage};
use crate::common::ApplicationResult;
use async_trait::async_trait;

/// Port delivering cone observations and vehicle location updates.
/// Implementations (adapters) wrap Kafka topics or in-process channels.
#[async_trait]
pub trait InboundSource: Send {
    /// Next message, or `None` once the source is exhausted. Undecodable
    /// payloads surface as `Some(Err(..))` so the caller can skip them.
    async fn next_message(&mut self) -> Option<ApplicationResult<InboundMessage>>;
}

/// Port the ordered centerline is published through.
#[async_trait]
pub trait PathPublisher: Send + Sync {
    async fn publish(&self, message: &CenterlineMessage) -> Result<(), String>;
}
