pub mod boundary;
pub mod coil;
pub mod curve;
pub mod primitive;

pub use boundary::BoundaryRectangle;
pub use coil::{CoilLoop, CoilPath, Direction};
pub use curve::{Arc, Curve, LineSegment};
pub use primitive::Primitive;
