pub mod buffered_logger;
pub mod channel_publisher;
pub mod console_logger;
pub mod file_logger;
pub mod kafka;
pub mod multi_logger;
pub mod noop_logger;

pub use buffered_logger::*;
pub use channel_publisher::*;
pub use console_logger::*;
pub use file_logger::*;
pub use kafka::*;
pub use multi_logger::*;
pub use noop_logger::*;
