use log::{error as log_error, info as log_info, warn as log_warn};
use std::sync::Arc;

/// Domain-level logging port.
/// Kept small and non-fallible so the centerline loop never fails on logging.
pub trait DomainLogger: Send + Sync + 'static {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

pub type DynLogger = Arc<dyn DomainLogger>;

/// Log target used for domain messages routed through the `log` facade.
pub const LOG_TARGET: &str = "trackfinder";

/// Domain logger backed by `fast_log` writing to a file.
///
/// File only: console output belongs to the tracing subscriber, so a message
/// sent through both this logger and the console logger is printed once.
pub struct FileLogger;

impl FileLogger {
    /// Install `fast_log` as the global `log` backend writing to `path`.
    pub fn init(path: &str, level: log::LevelFilter) -> Result<Self, Box<dyn std::error::Error>> {
        fast_log::init(fast_log::config::Config::new().file(path).level(level))?;
        Ok(Self)
    }
}

impl DomainLogger for FileLogger {
    fn info(&self, msg: &str) {
        log_info!(target: LOG_TARGET, "{}", msg);
    }

    fn warn(&self, msg: &str) {
        log_warn!(target: LOG_TARGET, "{}", msg);
    }

    fn error(&self, msg: &str) {
        log_error!(target: LOG_TARGET, "{}", msg);
    }
}
