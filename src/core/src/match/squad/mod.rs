pub mod selector;
pub mod tactics;

pub use selector::*;
pub use tactics::*;
