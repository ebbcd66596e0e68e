pub mod market;
pub mod needs;
pub mod negotiation;
pub mod offer;
pub mod transfer;
pub mod valuation;

pub use market::*;
pub use needs::*;
pub use negotiation::*;
pub use offer::*;
pub use transfer::*;
pub use valuation::*;
