pub mod club;
pub mod membership;
pub mod player;

pub use club::*;
pub use membership::*;
pub use player::*;
