use crate::math::{Point2, Vector2, TOLERANCE};

use super::Curve;

/// A bounded straight segment from `start` to `end`.
///
/// The parametric form is: `P(t) = start + t * (end - start)`, `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
}

impl LineSegment {
    /// Creates a new segment between two points.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the terminal point of the segment.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }
}

impl Curve for LineSegment {
    fn evaluate(&self, t: f64) -> Point2 {
        self.start + (self.end - self.start) * t
    }

    fn tangent(&self, _t: f64) -> Vector2 {
        let dir = self.end - self.start;
        let len = dir.norm();
        if len < TOLERANCE {
            Vector2::zeros()
        } else {
            dir / len
        }
    }

    fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}
