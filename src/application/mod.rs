pub mod simulator;
pub mod trackfinder_service;

pub use simulator::*;
pub use trackfinder_service::*;
