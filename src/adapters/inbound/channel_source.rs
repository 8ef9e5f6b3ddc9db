use crate::common::ApplicationResult;
use crate::domains::centerline::{InboundMessage, InboundSource};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// In-process inbound source backed by a tokio channel. The source ends once
/// every sender has been dropped.
pub struct ChannelSource {
    receiver: mpsc::Receiver<InboundMessage>,
}

impl ChannelSource {
    pub fn new(receiver: mpsc::Receiver<InboundMessage>) -> Self {
        Self { receiver }
    }

    pub fn channel(capacity: usize) -> (mpsc::Sender<InboundMessage>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self::new(rx))
    }
}

#[async_trait]
impl InboundSource for ChannelSource {
    async fn next_message(&mut self) -> Option<ApplicationResult<InboundMessage>> {
        self.receiver.recv().await.map(Ok)
    }
}
