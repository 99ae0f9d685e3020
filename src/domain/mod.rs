pub mod grid;
pub mod meter;
pub mod region;
pub mod weather;

pub use grid::*;
pub use meter::*;
pub use region::*;
pub use weather::*;
