mod delivery;
mod health_check;

pub use delivery::*;
pub use health_check::*;
