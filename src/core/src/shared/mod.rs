pub mod currency;
pub mod fullname;
pub mod ids;
pub mod indexes;

pub use currency::*;
pub use fullname::*;
pub use ids::*;
pub use indexes::*;
