pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod params;
pub mod surface;

pub use error::{Result, SerpentineError};
pub use params::CoilParams;
