pub mod centerline;
pub mod logger;

pub use centerline::*;
pub use logger::*;
