mod club;
mod competition;
mod country;
mod names;
mod settings;

pub use club::*;
pub use competition::*;
pub use country::*;
pub use names::*;
pub use settings::*;
