pub mod pending;
pub mod processor;

pub use pending::*;
pub use processor::*;
