// Own test binary: installs the process-wide `log` and tracing backends.
use std::fs;
use std::time::{Duration, Instant};

use tempfile::tempdir;
use trackfinder_app::adapters::outbound::init_combined_logger;

fn read_until_contains(path: &std::path::Path, needle: &str) -> String {
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        log::logger().flush();
        let contents = fs::read_to_string(path).unwrap_or_default();
        if contents.contains(needle) || Instant::now() > deadline {
            return contents;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
}

#[test]
fn test_combined_logger_writes_each_message_to_file_once() {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::sink)
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("trackfinder.log");
    let logger = init_combined_logger(path.to_str().unwrap(), log::LevelFilter::Info);

    logger.warn("observation 17 dropped: cones out of view");

    let contents = read_until_contains(&path, "observation 17 dropped");
    assert_eq!(
        contents.matches("observation 17 dropped: cones out of view").count(),
        1,
        "log file contents: {}",
        contents
    );
}
