pub mod celestial;
pub mod location;
pub mod time;

pub use celestial::*;
pub use location::*;
pub use time::*;
