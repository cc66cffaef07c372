use super::curve::{Arc, LineSegment};
use super::primitive::Primitive;

/// Horizontal travel direction of one coil loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right, turning on the right edge.
    Right,
    /// Right to left, turning on the left edge.
    Left,
}

impl Direction {
    /// Direction of the loop at `index`: even loops run rightward.
    #[must_use]
    pub fn for_loop(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Right
        } else {
            Self::Left
        }
    }
}

/// One loop of the coil: a straight run followed by its semicircular turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilLoop {
    pub index: usize,
    pub direction: Direction,
    pub line: LineSegment,
    pub arc: Arc,
}

/// The ordered sequence of coil loops produced by the layout generator.
///
/// Loop order is draw order and the traversal order of the physical tube.
/// A `CoilPath` cannot be modified after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct CoilPath {
    loops: Vec<CoilLoop>,
    arc_radius: f64,
}

impl CoilPath {
    pub(crate) fn new(loops: Vec<CoilLoop>, arc_radius: f64) -> Self {
        Self { loops, arc_radius }
    }

    /// Returns the loops in draw order.
    #[must_use]
    pub fn loops(&self) -> &[CoilLoop] {
        &self.loops
    }

    /// Returns the number of loops.
    #[must_use]
    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    /// Returns whether the path has no loops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    /// Returns the radius shared by every arc of this path.
    #[must_use]
    pub fn arc_radius(&self) -> f64 {
        self.arc_radius
    }

    /// Iterates over the primitives in draw order: line, arc, line, arc, ...
    pub fn primitives(&self) -> impl Iterator<Item = Primitive> + '_ {
        self.loops
            .iter()
            .flat_map(|l| [Primitive::Line(l.line), Primitive::Arc(l.arc)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_alternates() {
        assert_eq!(Direction::for_loop(0), Direction::Right);
        assert_eq!(Direction::for_loop(1), Direction::Left);
        assert_eq!(Direction::for_loop(2), Direction::Right);
        assert_eq!(Direction::for_loop(25), Direction::Left);
    }

    #[test]
    fn empty_path_has_no_primitives() {
        let path = CoilPath::new(Vec::new(), 0.1);
        assert!(path.is_empty());
        assert_eq!(path.primitives().count(), 0);
    }
}
