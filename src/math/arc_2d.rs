//! 2D circular-arc math utilities.
//!
//! Angles are in radians, measured counter-clockwise from the positive x-axis.
//! Every arc handled here sweeps counter-clockwise from its start angle to its
//! end angle.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::{Point2, Vector2, TOLERANCE};

/// Evaluates the point on a circle at `angle`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, angle: f64) -> Point2 {
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Computes the unit counter-clockwise tangent of a circle at `angle`.
#[must_use]
pub fn arc_tangent_at(angle: f64) -> Vector2 {
    Vector2::new(-angle.sin(), angle.cos())
}

/// Returns the counter-clockwise sweep from `start_angle` to `end_angle`, in `(0, 2π]`.
///
/// Coincident angles (modulo `2π`) describe a full circle.
#[must_use]
pub fn ccw_sweep(start_angle: f64, end_angle: f64) -> f64 {
    let sweep = (end_angle - start_angle).rem_euclid(TAU);
    if sweep < TOLERANCE || TAU - sweep < TOLERANCE {
        TAU
    } else {
        sweep
    }
}

/// Returns whether `angle` lies on the counter-clockwise sweep starting at `start_angle`.
#[must_use]
pub fn angle_in_sweep(angle: f64, start_angle: f64, sweep: f64) -> bool {
    let offset = (angle - start_angle).rem_euclid(TAU);
    offset <= sweep + TOLERANCE || TAU - offset < TOLERANCE
}

/// The four axis-extreme angles of a circle: `0`, `π/2`, `π`, `3π/2`.
#[must_use]
pub fn quadrant_angles() -> [f64; 4] {
    [0.0, FRAC_PI_2, 2.0 * FRAC_PI_2, 3.0 * FRAC_PI_2]
}
