use std::sync::Arc;

use trackfinder_app::adapters::inbound::ChannelSource;
use trackfinder_app::adapters::outbound::{init_noop_logger, ChannelPublisher};
use trackfinder_app::application::{ServiceStats, TrackFinderService};
use trackfinder_app::config::ServiceConfig;
use trackfinder_app::domains::centerline::*;

fn gate_message() -> ConesMessage {
    ConesMessage::from_markers(&[
        Marker::new(0.0, 0.0, Side::A),
        Marker::new(0.0, 10.0, Side::A),
        Marker::new(10.0, 0.0, Side::B),
        Marker::new(10.0, 10.0, Side::B),
    ])
}

fn one_sided_message() -> ConesMessage {
    ConesMessage::from_markers(&[
        Marker::new(0.0, 0.0, Side::B),
        Marker::new(4.0, 10.0, Side::B),
    ])
}

fn service(config: ServiceConfig) -> (TrackFinderService, tokio::sync::mpsc::Receiver<CenterlineMessage>) {
    let (publisher, rx) = ChannelPublisher::channel(32);
    let service = TrackFinderService::new(
        TrackFinder::default(),
        VehiclePositionStore::new(),
        Arc::new(publisher),
        init_noop_logger(),
        config,
    );
    (service, rx)
}

#[tokio::test]
async fn test_location_then_cones_publishes_ordered_centerline() {
    let (mut service, mut rx) = service(ServiceConfig::default());

    let none = service
        .handle(InboundMessage::Location(LocationMessage {
            location: Point::new(5.0, 12.0),
        }))
        .await
        .unwrap();
    assert!(none.is_none());

    let published = service
        .handle(InboundMessage::Cones(gate_message()))
        .await
        .unwrap()
        .expect("centerline should be published");

    let received = rx.try_recv().unwrap();
    assert_eq!(received, published);
    assert_eq!(received.points.len(), 9);
    // Vehicle sits above the gate, so the path runs downward.
    assert_eq!(received.points[0].y, 9.0);
    assert_eq!(received.points[8].y, 1.0);
}

#[tokio::test]
async fn test_empty_observation_publishes_empty_path() {
    let (mut service, mut rx) = service(ServiceConfig::default());

    service
        .handle(InboundMessage::Cones(ConesMessage::default()))
        .await
        .unwrap();

    let received = rx.try_recv().unwrap();
    assert!(received.points.is_empty());
    assert_eq!(service.stats().failed_observations, 0);
}

#[tokio::test]
async fn test_degenerate_observation_is_skipped_by_default() {
    let (mut service, mut rx) = service(ServiceConfig::default());

    let result = service
        .handle(InboundMessage::Cones(one_sided_message()))
        .await
        .unwrap();

    assert!(result.is_none());
    assert!(rx.try_recv().is_err());
    assert_eq!(service.stats().failed_observations, 1);
    assert_eq!(service.stats().published, 0);
}

#[tokio::test]
async fn test_degenerate_observation_can_publish_empty_path() {
    let (mut service, mut rx) = service(ServiceConfig {
        publish_empty_on_failure: true,
    });

    service
        .handle(InboundMessage::Cones(one_sided_message()))
        .await
        .unwrap();

    assert!(rx.try_recv().unwrap().points.is_empty());
    assert_eq!(service.stats().failed_observations, 1);
}

#[tokio::test]
async fn test_invalid_side_does_not_stop_processing() {
    let (mut service, mut rx) = service(ServiceConfig::default());
    let mut bad = gate_message();
    bad.cones[0].side = 3;

    let (tx, mut source) = ChannelSource::channel(8);
    tx.send(InboundMessage::Cones(bad)).await.unwrap();
    tx.send(InboundMessage::Cones(gate_message())).await.unwrap();
    drop(tx);

    let stats = service.run(&mut source).await;

    assert_eq!(
        stats,
        ServiceStats {
            observations: 2,
            location_updates: 0,
            published: 1,
            failed_observations: 1,
            rejected_messages: 0,
        }
    );
    assert_eq!(rx.try_recv().unwrap().points.len(), 9);
}

#[tokio::test]
async fn test_latest_position_wins() {
    let (mut service, mut rx) = service(ServiceConfig::default());

    let (tx, mut source) = ChannelSource::channel(8);
    for y in [-5.0, 20.0, -5.0] {
        tx.send(InboundMessage::Location(LocationMessage {
            location: Point::new(5.0, y),
        }))
        .await
        .unwrap();
    }
    tx.send(InboundMessage::Cones(gate_message())).await.unwrap();
    drop(tx);

    let stats = service.run(&mut source).await;

    assert_eq!(stats.location_updates, 3);
    assert_eq!(service.vehicle().latest(), Point::new(5.0, -5.0));
    assert_eq!(rx.try_recv().unwrap().points[0].y, 1.0);
}

#[tokio::test]
async fn test_position_updated_from_another_task() {
    let (service, _rx) = service(ServiceConfig::default());
    let store = service.vehicle().clone();

    tokio::spawn(async move {
        store.update(Point::new(5.0, 30.0));
    })
    .await
    .unwrap();

    let markers = gate_message().into_markers().unwrap();
    let path = service.process_observation(&markers).unwrap();
    assert_eq!(path.first().unwrap().y, 9.0);
    assert_eq!(service.vehicle().update_count(), 1);
}

#[test]
fn test_identical_observations_publish_identical_paths() {
    let (mut service, mut rx) = service(ServiceConfig::default());

    tokio_test::block_on(async {
        service
            .handle(InboundMessage::Cones(gate_message()))
            .await
            .unwrap();
        service
            .handle(InboundMessage::Cones(gate_message()))
            .await
            .unwrap();
    });

    let first = rx.try_recv().unwrap();
    let second = rx.try_recv().unwrap();
    assert_eq!(first.points, second.points);
    assert_ne!(first.observation_id, second.observation_id);
}
