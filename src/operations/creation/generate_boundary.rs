use crate::geometry::{BoundaryRectangle, LineSegment};
use crate::math::Point2;

/// Creates the closed rectangle `[0, 0]–[width, height]` around a coil.
pub struct GenerateBoundary {
    width: f64,
    height: f64,
}

impl GenerateBoundary {
    /// Creates a new `GenerateBoundary` operation.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Executes the operation, returning the four edges in fixed order.
    #[must_use]
    pub fn execute(&self) -> BoundaryRectangle {
        let corners = [
            Point2::new(0.0, 0.0),
            Point2::new(self.width, 0.0),
            Point2::new(self.width, self.height),
            Point2::new(0.0, self.height),
        ];
        BoundaryRectangle::new([
            LineSegment::new(corners[0], corners[1]),
            LineSegment::new(corners[1], corners[2]),
            LineSegment::new(corners[2], corners[3]),
            LineSegment::new(corners[3], corners[0]),
        ])
    }
}
