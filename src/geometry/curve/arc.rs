use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{arc_point_at, arc_tangent_at, ccw_sweep};
use crate::math::{Point2, Vector2};

use super::Curve;

/// A planar circular arc.
///
/// Defined by a center, radius, and a pair of angles in radians. The arc
/// always sweeps counter-clockwise from `start_angle` to `end_angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive and finite)
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or not finite.
    pub fn new(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
        })
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the end angle in radians.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Returns the counter-clockwise sweep in `(0, 2π]`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        ccw_sweep(self.start_angle, self.end_angle)
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Point2 {
        arc_point_at(&self.center, self.radius, self.start_angle + self.sweep() * t)
    }

    fn tangent(&self, t: f64) -> Vector2 {
        arc_tangent_at(self.start_angle + self.sweep() * t)
    }

    fn length(&self) -> f64 {
        self.radius * self.sweep()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn rejects_zero_radius() {
        assert!(Arc::new(Point2::origin(), 0.0, 0.0, PI).is_err());
        assert!(Arc::new(Point2::origin(), -1.0, 0.0, PI).is_err());
        assert!(Arc::new(Point2::origin(), f64::NAN, 0.0, PI).is_err());
    }

    #[test]
    fn accepts_radius_below_tolerance() {
        let arc = Arc::new(Point2::origin(), 5e-11, -FRAC_PI_2, FRAC_PI_2).unwrap();
        assert_abs_diff_eq!(arc.radius(), 5e-11);
    }

    #[test]
    fn right_semicircle_endpoints() {
        let arc = Arc::new(Point2::new(1.0, 0.1), 0.1, -FRAC_PI_2, FRAC_PI_2).unwrap();
        let s = arc.start_point();
        let e = arc.end_point();
        assert_abs_diff_eq!(s.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(e.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(e.y, 0.2, epsilon = 1e-12);
        // Apex sits to the right of the center.
        let apex = arc.evaluate(0.5);
        assert_abs_diff_eq!(apex.x, 1.1, epsilon = 1e-12);
    }

    #[test]
    fn left_semicircle_runs_top_to_bottom() {
        let arc = Arc::new(Point2::new(0.0, 0.3), 0.1, FRAC_PI_2, 3.0 * FRAC_PI_2).unwrap();
        assert_abs_diff_eq!(arc.start_point().y, 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.end_point().y, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.evaluate(0.5).x, -0.1, epsilon = 1e-12);
    }

    #[test]
    fn semicircle_length() {
        let arc = Arc::new(Point2::origin(), 2.0, FRAC_PI_2, 3.0 * FRAC_PI_2).unwrap();
        assert_abs_diff_eq!(arc.length(), 2.0 * PI, epsilon = 1e-12);
    }
}
