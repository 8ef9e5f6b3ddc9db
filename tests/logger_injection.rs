use std::sync::{Arc, Mutex};
use std::time::Duration;

use trackfinder_app::adapters::outbound::{
    init_buffered_logger, init_console_logger, init_noop_logger, MultiLogger,
};
use trackfinder_app::adapters::inbound::ChannelSource;
use trackfinder_app::adapters::outbound::ChannelPublisher;
use trackfinder_app::application::TrackFinderService;
use trackfinder_app::config::ServiceConfig;
use trackfinder_app::domains::centerline::*;
use trackfinder_app::domains::logger::{DomainLogger, DynLogger};

struct BridgeCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

impl BridgeCapture {
    fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl DomainLogger for BridgeCapture {
    fn info(&self, msg: &str) {
        self.messages.lock().unwrap().push(format!("INFO:{}", msg));
    }
    fn warn(&self, msg: &str) {
        self.messages.lock().unwrap().push(format!("WARN:{}", msg));
    }
    fn error(&self, msg: &str) {
        self.messages.lock().unwrap().push(format!("ERR:{}", msg));
    }
}

#[tokio::test]
async fn test_buffered_logger_forwards_in_background() {
    let capture = Arc::new(BridgeCapture::new());
    let sink = capture.clone() as DynLogger;

    let buffered = init_buffered_logger(sink, 8);
    buffered.info("one");
    buffered.warn("two");
    buffered.error("three");

    tokio::time::sleep(Duration::from_millis(50)).await;

    let msgs = capture.messages.lock().unwrap();
    assert!(msgs.iter().any(|m| m.contains("INFO:one")));
    assert!(msgs.iter().any(|m| m.contains("WARN:two")));
    assert!(msgs.iter().any(|m| m.contains("ERR:three")));
    assert_eq!(buffered.dropped(), 0);
}

#[test]
fn test_multi_logger_fans_out() {
    let first = Arc::new(BridgeCapture::new());
    let second = Arc::new(BridgeCapture::new());
    let multi = MultiLogger::new(vec![
        first.clone() as DynLogger,
        second.clone() as DynLogger,
        init_noop_logger(),
        init_console_logger(),
    ]);

    multi.warn("cones out of view");

    assert_eq!(first.messages.lock().unwrap().as_slice(), ["WARN:cones out of view"]);
    assert_eq!(second.messages.lock().unwrap().as_slice(), ["WARN:cones out of view"]);
}

#[tokio::test]
async fn test_service_reports_failures_through_injected_logger() {
    let capture = Arc::new(BridgeCapture::new());
    let (publisher, _rx) = ChannelPublisher::channel(4);
    let mut service = TrackFinderService::new(
        TrackFinder::default(),
        VehiclePositionStore::new(),
        Arc::new(publisher),
        capture.clone() as DynLogger,
        ServiceConfig::default(),
    );

    let (tx, mut source) = ChannelSource::channel(4);
    tx.send(InboundMessage::Cones(ConesMessage::from_markers(&[
        Marker::new(0.0, 0.0, Side::A),
        Marker::new(1.0, 5.0, Side::A),
    ])))
    .await
    .unwrap();
    drop(tx);

    service.run(&mut source).await;

    let msgs = capture.messages.lock().unwrap();
    assert!(msgs.iter().any(|m| m.starts_with("WARN:") && m.contains("Degenerate label set")));
    assert!(msgs.iter().any(|m| m.contains("service stopped")));
}
