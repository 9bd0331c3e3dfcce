pub mod location;
pub mod solar;

pub use location::*;
pub use solar::*;
