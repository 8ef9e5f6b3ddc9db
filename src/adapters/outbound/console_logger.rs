use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Routes domain messages into the tracing subscriber.
struct TracingBridge;

impl DomainLogger for TracingBridge {
    fn info(&self, msg: &str) {
        tracing::info!(target: "trackfinder::domain", "{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!(target: "trackfinder::domain", "{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!(target: "trackfinder::domain", "{}", msg);
    }
}

/// Console-backed domain logger; also the fallback when no log file is configured.
pub fn init_console_logger() -> DynLogger {
    Arc::new(TracingBridge)
}
