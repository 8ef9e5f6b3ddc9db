use std::fs;
use tempfile::tempdir;
use trackfinder_app::domains::centerline::Kernel;
use trackfinder_app::Config;

const SAMPLE: &str = r#"
[kafka]
brokers = ["broker-1:9092", "broker-2:9092"]
group_id = "trackfinder-test"

[kafka.topics]
cones = "sim.cones"

[classifier]
c = 2.5
max_iterations = 500

[classifier.kernel]
type = "rbf"
gamma = 0.25

[service]
publish_empty_on_failure = true

[logging]
file = "/tmp/trackfinder.log"
level = "debug"
"#;

#[tokio::test]
async fn test_from_file_merges_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, SAMPLE).unwrap();

    let config = Config::from_file(&path).await.unwrap();

    assert_eq!(config.kafka.brokers, vec!["broker-1:9092", "broker-2:9092"]);
    assert_eq!(config.kafka.group_id, "trackfinder-test");
    assert_eq!(config.kafka.client_id, "trackfinder");
    assert_eq!(config.kafka.topics.cones, "sim.cones");
    assert_eq!(config.kafka.topics.centerline, "car.targetline");
    assert_eq!(config.classifier.kernel, Kernel::Rbf { gamma: 0.25 });
    assert_eq!(config.classifier.c, 2.5);
    assert_eq!(config.classifier.max_iterations, 500);
    assert_eq!(config.classifier.tolerance, 1e-3);
    assert!(config.service.publish_empty_on_failure);
    assert_eq!(config.logging.file.as_deref(), Some("/tmp/trackfinder.log"));
    assert_eq!(config.logging.level_filter(), log::LevelFilter::Debug);
}

#[tokio::test]
async fn test_from_file_missing_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("absent.toml")).await.is_err());
}

#[test]
fn test_layered_load_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, SAMPLE).unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.kafka.group_id, "trackfinder-test");
    assert_eq!(config.classifier.kernel, Kernel::Rbf { gamma: 0.25 });
    assert!(config.service.publish_empty_on_failure);
}

#[test]
fn test_layered_load_without_file_uses_defaults() {
    let dir = tempdir().unwrap();

    let config = Config::load(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.classifier.kernel, Kernel::Intersection);
    assert_eq!(config.classifier.c, 1.0);
    assert!(!config.service.publish_empty_on_failure);
}
