pub mod result;
pub mod schedule;
pub mod simulator;
pub mod table;

pub use result::*;
pub use schedule::*;
pub use simulator::*;
pub use table::*;
