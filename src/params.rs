use crate::error::LayoutError;

/// Upper bound on the number of loops a single layout may hold.
pub const MAX_LOOPS: usize = 1_000_000;

/// Overall dimensions of a serpentine coil, all in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilParams {
    /// Horizontal extent of each straight run.
    pub width: f64,
    /// Vertical extent of the bounding rectangle.
    pub height: f64,
    /// Vertical spacing between successive straight runs.
    pub pitch: f64,
    /// Tube diameter; arcs use half of it as their radius.
    pub tube_width: f64,
}

impl Default for CoilParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 5.0,
            pitch: 0.2,
            tube_width: 0.2,
        }
    }
}

impl CoilParams {
    /// Creates a new parameter set.
    #[must_use]
    pub fn new(width: f64, height: f64, pitch: f64, tube_width: f64) -> Self {
        Self {
            width,
            height,
            pitch,
            tube_width,
        }
    }

    /// Radius of every turn arc.
    #[must_use]
    pub fn arc_radius(&self) -> f64 {
        self.tube_width / 2.0
    }

    /// Number of loops the layout produces: `floor(height / pitch)`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::TooManyLoops`] if the count exceeds [`MAX_LOOPS`].
    pub fn loop_count(&self) -> Result<usize, LayoutError> {
        loop_count(self.height, self.pitch)
    }

    /// Checks every dimension is finite and positive, and that at least one loop fits.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] naming the first offending field, or
    /// [`LayoutError::PitchExceedsHeight`] when the coil would be empty, or
    /// [`LayoutError::TooManyLoops`] when the pitch is too fine for the height.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_dimensions(self.width, self.height, self.pitch, self.tube_width)?;
        if self.pitch > self.height {
            return Err(LayoutError::PitchExceedsHeight {
                pitch: self.pitch,
                height: self.height,
            });
        }
        self.loop_count()?;
        Ok(())
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn loop_count(height: f64, pitch: f64) -> Result<usize, LayoutError> {
    let loops = (height / pitch).floor();
    if !loops.is_finite() || loops > MAX_LOOPS as f64 {
        return Err(LayoutError::TooManyLoops {
            pitch,
            height,
            max: MAX_LOOPS,
        });
    }
    Ok(loops as usize)
}

pub(crate) fn check_dimensions(
    width: f64,
    height: f64,
    pitch: f64,
    tube_width: f64,
) -> Result<(), LayoutError> {
    for (field, value) in [
        ("width", width),
        ("height", height),
        ("pitch", pitch),
        ("tube_width", tube_width),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(LayoutError::InvalidParameter { field, value });
        }
    }
    // The smallest subnormal halves to zero, leaving no arc radius.
    if tube_width / 2.0 <= 0.0 {
        return Err(LayoutError::InvalidParameter {
            field: "tube_width",
            value: tube_width,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_coil() {
        let params = CoilParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.loop_count().unwrap(), 25);
        assert!((params.arc_radius() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_field_by_name() {
        let err = CoilParams::new(1.0, 5.0, 0.0, 0.2).validate().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidParameter { field: "pitch", .. }
        ));

        let err = CoilParams::new(-1.0, 5.0, 0.2, 0.2).validate().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidParameter { field: "width", .. }
        ));
    }

    #[test]
    fn rejects_nan() {
        let err = CoilParams::new(1.0, 5.0, 0.2, f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidParameter {
                field: "tube_width",
                ..
            }
        ));
    }

    #[test]
    fn rejects_pitch_above_height() {
        let err = CoilParams::new(1.0, 0.15, 0.2, 0.2).validate().unwrap_err();
        assert!(matches!(err, LayoutError::PitchExceedsHeight { .. }));
        assert!(err.to_string().contains("no loops"));
    }

    #[test]
    fn pitch_equal_to_height_is_one_loop() {
        let params = CoilParams::new(1.0, 0.2, 0.2, 0.2);
        assert!(params.validate().is_ok());
        assert_eq!(params.loop_count().unwrap(), 1);
    }

    #[test]
    fn rejects_pitch_too_fine_for_height() {
        let params = CoilParams::new(1.0, 1e300, 1e-300, 0.2);
        let err = params.validate().unwrap_err();
        assert!(matches!(err, LayoutError::TooManyLoops { .. }));
        assert!(err.to_string().contains("pitch"));
        assert!(params.loop_count().is_err());
    }

    #[test]
    fn loop_count_at_limit_is_accepted() {
        #[allow(clippy::cast_precision_loss)]
        let params = CoilParams::new(1.0, MAX_LOOPS as f64, 1.0, 0.2);
        assert_eq!(params.loop_count().unwrap(), MAX_LOOPS);
    }
}
