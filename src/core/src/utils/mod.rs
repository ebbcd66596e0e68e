pub mod calendar;
pub mod logging;
pub mod poisson;
pub mod random;

pub use calendar::*;
pub use logging::*;
pub use poisson::*;
pub use random::*;
