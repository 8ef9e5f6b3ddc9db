use crate::common::{ApplicationError, ApplicationResult};
use crate::domains::logger::{DynLogger, FileLogger};
use std::sync::Arc;

/// Install the file logger and return a domain logger the service can be given.
pub fn init_file_logger(path: &str, level: log::LevelFilter) -> ApplicationResult<DynLogger> {
    let logger = FileLogger::init(path, level)
        .map_err(|e| ApplicationError::Logging(format!("Failed to initialize fast_log: {}", e)))?;
    Ok(Arc::new(logger))
}
