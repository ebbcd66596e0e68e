pub mod builder;
pub mod generator;
pub mod lifecycle;
pub mod player;
pub mod positions;

pub use builder::*;
pub use generator::*;
pub use lifecycle::*;
pub use player::*;
pub use positions::*;
