pub mod builder;
pub mod formations;
pub mod state;
pub mod tables;

pub use builder::*;
pub use formations::*;
pub use state::*;
pub use tables::*;
