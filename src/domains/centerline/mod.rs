pub mod classifier;
pub mod finder;
pub mod messages;
pub mod normalizer;
pub mod orderer;
pub mod ports;
pub mod position;
pub mod tracer;
pub mod types;

pub use classifier::*;
pub use finder::*;
pub use messages::*;
pub use normalizer::*;
pub use orderer::*;
pub use ports::*;
pub use position::*;
pub use tracer::*;
pub use types::*;
