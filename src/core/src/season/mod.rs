pub mod result;
pub mod simulator;
pub mod youth;

pub use result::*;
pub use simulator::*;
pub use youth::*;
