mod arc;
mod line;

pub use arc::Arc;
pub use line::LineSegment;

use crate::math::{Point2, Vector2};

/// Trait for bounded planar curves, parameterized over `[0, 1]`.
pub trait Curve {
    /// Evaluates the curve at normalized parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Computes the unit tangent at normalized parameter `t`, in traversal direction.
    fn tangent(&self, t: f64) -> Vector2;

    /// Returns the point at `t = 0`.
    fn start_point(&self) -> Point2 {
        self.evaluate(0.0)
    }

    /// Returns the point at `t = 1`.
    fn end_point(&self) -> Point2 {
        self.evaluate(1.0)
    }

    /// Returns the arc length of the curve.
    fn length(&self) -> f64;
}
