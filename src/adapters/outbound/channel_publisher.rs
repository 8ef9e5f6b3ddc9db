use crate::domains::centerline::{CenterlineMessage, PathPublisher};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Publishes centerlines into a tokio channel; used for local runs and tests.
pub struct ChannelPublisher {
    sender: mpsc::Sender<CenterlineMessage>,
}

impl ChannelPublisher {
    pub fn new(sender: mpsc::Sender<CenterlineMessage>) -> Self {
        Self { sender }
    }

    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<CenterlineMessage>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl PathPublisher for ChannelPublisher {
    async fn publish(&self, message: &CenterlineMessage) -> Result<(), String> {
        self.sender
            .send(message.clone())
            .await
            .map_err(|e| format!("Failed to publish centerline: {}", e))
    }
}
