use std::f64::consts::FRAC_PI_2;

use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::{Arc, CoilLoop, CoilPath, Direction, LineSegment};
use crate::math::Point2;
use crate::params::{check_dimensions, loop_count, CoilParams};

/// Lays out a vertical serpentine coil.
///
/// Loop `i` is a straight run at `y = i * pitch` across the full width,
/// followed by a semicircular turn of radius `tube_width / 2` on the side the
/// run ends at. Even loops run left to right.
pub struct GenerateCoil {
    width: f64,
    height: f64,
    pitch: f64,
    tube_width: f64,
}

impl GenerateCoil {
    /// Creates a new `GenerateCoil` operation.
    #[must_use]
    pub fn new(width: f64, height: f64, pitch: f64, tube_width: f64) -> Self {
        Self {
            width,
            height,
            pitch,
            tube_width,
        }
    }

    /// Creates the operation from a parameter set.
    #[must_use]
    pub fn from_params(params: &CoilParams) -> Self {
        Self::new(params.width, params.height, params.pitch, params.tube_width)
    }

    /// Executes the layout, returning the coil path.
    ///
    /// A pitch larger than the height yields an empty path. The loop count is
    /// `floor(height / pitch)` with the first run at `y = 0`, so the last turn
    /// may rise above `height`.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is non-positive or not finite, or if
    /// the pitch is too fine for the height.
    pub fn execute(&self) -> Result<CoilPath> {
        check_dimensions(self.width, self.height, self.pitch, self.tube_width)?;

        let arc_radius = self.tube_width / 2.0;
        let num_loops = loop_count(self.height, self.pitch)?;
        if num_loops == 0 {
            warn!(
                pitch = self.pitch,
                height = self.height,
                "pitch exceeds height, coil has no loops"
            );
        }

        let mut loops = Vec::with_capacity(num_loops);
        let mut current_y = 0.0;
        for index in 0..num_loops {
            let direction = Direction::for_loop(index);
            let (line, arc) = match direction {
                Direction::Right => (
                    LineSegment::new(
                        Point2::new(0.0, current_y),
                        Point2::new(self.width, current_y),
                    ),
                    Arc::new(
                        Point2::new(self.width, current_y + arc_radius),
                        arc_radius,
                        -FRAC_PI_2,
                        FRAC_PI_2,
                    )?,
                ),
                Direction::Left => (
                    LineSegment::new(
                        Point2::new(self.width, current_y),
                        Point2::new(0.0, current_y),
                    ),
                    Arc::new(
                        Point2::new(0.0, current_y + arc_radius),
                        arc_radius,
                        FRAC_PI_2,
                        3.0 * FRAC_PI_2,
                    )?,
                ),
            };
            loops.push(CoilLoop {
                index,
                direction,
                line,
                arc,
            });
            current_y += self.pitch;
        }

        debug!(loops = num_loops, arc_radius, "coil layout generated");
        Ok(CoilPath::new(loops, arc_radius))
    }
}
