use super::curve::LineSegment;
use super::primitive::Primitive;

/// The closed rectangle `[0, 0]–[width, height]` framing the coil.
///
/// Edges run `(0,0) → (w,0) → (w,h) → (0,h) → (0,0)`, in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryRectangle {
    edges: [LineSegment; 4],
}

impl BoundaryRectangle {
    pub(crate) fn new(edges: [LineSegment; 4]) -> Self {
        Self { edges }
    }

    /// Returns the four edges in draw order.
    #[must_use]
    pub fn edges(&self) -> &[LineSegment; 4] {
        &self.edges
    }

    /// Iterates over the edges as primitives.
    pub fn primitives(&self) -> impl Iterator<Item = Primitive> + '_ {
        self.edges.iter().copied().map(Primitive::Line)
    }
}
