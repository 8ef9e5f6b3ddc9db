pub mod channel_source;
pub mod kafka_source;

pub use channel_source::*;
pub use kafka_source::*;
