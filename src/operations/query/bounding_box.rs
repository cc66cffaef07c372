use crate::geometry::{Curve, Primitive};
use crate::math::arc_2d::{angle_in_sweep, arc_point_at, quadrant_angles};
use crate::math::Point2;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    /// Creates a box from its corners.
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    fn from_point(p: Point2) -> Self {
        Self { min: p, max: p }
    }

    fn include(&mut self, p: Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Returns the smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Aabb) -> Aabb {
        let mut out = *self;
        out.include(other.min);
        out.include(other.max);
        out
    }
}

/// Computes the axis-aligned bounding box of a sequence of primitives.
pub struct BoundingBox {
    primitives: Vec<Primitive>,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(primitives: impl IntoIterator<Item = Primitive>) -> Self {
        Self {
            primitives: primitives.into_iter().collect(),
        }
    }

    /// Executes the query, returning the AABB, or `None` for no primitives.
    ///
    /// Arcs contribute their endpoints and every axis extreme their sweep
    /// passes through, so the box is exact rather than a chord hull.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let mut aabb: Option<Aabb> = None;
        let mut include = |p: Point2| match aabb.as_mut() {
            Some(b) => b.include(p),
            None => aabb = Some(Aabb::from_point(p)),
        };

        for prim in &self.primitives {
            include(prim.start_point());
            include(prim.end_point());
            if let Primitive::Arc(arc) = prim {
                let sweep = arc.sweep();
                for angle in quadrant_angles() {
                    if angle_in_sweep(angle, arc.start_angle(), sweep) {
                        include(arc_point_at(arc.center(), arc.radius(), angle));
                    }
                }
            }
        }
        aabb
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{GenerateBoundary, GenerateCoil};
    use approx::assert_abs_diff_eq;

    #[test]
    fn reference_coil_bounds_overhang_rectangle() {
        let path = GenerateCoil::new(1.0, 5.0, 0.2, 0.2).execute().unwrap();
        let bb = BoundingBox::new(path.primitives()).execute().unwrap();
        // Turns bulge r = 0.1 beyond both side walls.
        assert_abs_diff_eq!(bb.min.x, -0.1, epsilon = 1e-9);
        assert_abs_diff_eq!(bb.max.x, 1.1, epsilon = 1e-9);
        assert_abs_diff_eq!(bb.min.y, 0.0, epsilon = 1e-9);
        // Last run at 4.8, its turn reaches 4.8 + 2r.
        assert_abs_diff_eq!(bb.max.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn boundary_bounds() {
        let rect = GenerateBoundary::new(2.0, 3.0).execute();
        let bb = BoundingBox::new(rect.primitives()).execute().unwrap();
        assert_eq!(bb.min, Point2::new(0.0, 0.0));
        assert_eq!(bb.max, Point2::new(2.0, 3.0));
    }

    #[test]
    fn union_covers_both() {
        let path = GenerateCoil::new(1.0, 5.0, 0.2, 0.2).execute().unwrap();
        let rect = GenerateBoundary::new(1.0, 5.0).execute();
        let a = BoundingBox::new(path.primitives()).execute().unwrap();
        let b = BoundingBox::new(rect.primitives()).execute().unwrap();
        let u = a.union(&b);
        assert_abs_diff_eq!(u.min.x, -0.1, epsilon = 1e-9);
        assert_abs_diff_eq!(u.max.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_has_no_box() {
        assert!(BoundingBox::new(Vec::new()).execute().is_none());
    }
}
