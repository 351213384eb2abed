pub mod controller;
pub mod elements;
pub mod geometry;

pub use controller::*;
pub use elements::*;
pub use geometry::*;
