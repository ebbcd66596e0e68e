pub mod award;
pub mod competition;
pub mod orchestrator;
pub mod stage;
pub mod transition;

pub use award::*;
pub use competition::*;
pub use orchestrator::*;
pub use stage::*;
pub use transition::*;
