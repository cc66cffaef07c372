use crate::geometry::{Curve, Primitive};

/// Computes the total length of a sequence of primitives.
///
/// For a coil path this is the length of tube needed to lay it.
pub struct Length {
    primitives: Vec<Primitive>,
}

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(primitives: impl IntoIterator<Item = Primitive>) -> Self {
        Self {
            primitives: primitives.into_iter().collect(),
        }
    }

    /// Executes the query.
    ///
    /// A line contributes `|end - start|`, an arc `radius * sweep`.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.primitives.iter().map(Curve::length).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{GenerateBoundary, GenerateCoil};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn reference_coil_tube_length() {
        let path = GenerateCoil::new(1.0, 5.0, 0.2, 0.2).execute().unwrap();
        let len = Length::new(path.primitives()).execute();
        // 25 runs of 1 m plus 25 semicircles of radius 0.1 m.
        assert_abs_diff_eq!(len, 25.0 + 25.0 * PI * 0.1, epsilon = 1e-9);
    }

    #[test]
    fn boundary_perimeter() {
        let rect = GenerateBoundary::new(1.0, 5.0).execute();
        assert_abs_diff_eq!(Length::new(rect.primitives()).execute(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_is_zero() {
        assert_abs_diff_eq!(Length::new(Vec::new()).execute(), 0.0);
    }
}
