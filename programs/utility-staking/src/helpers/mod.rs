pub mod cpi;
pub mod math;

pub use cpi::*;
pub use math::*;
