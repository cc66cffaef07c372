use crate::math::{Point2, Vector2};

use super::curve::{Arc, Curve, LineSegment};

/// A single drawing primitive, as submitted to a drafting surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Line(LineSegment),
    Arc(Arc),
}

impl Primitive {
    /// Returns the line segment, if this primitive is one.
    #[must_use]
    pub fn as_line(&self) -> Option<&LineSegment> {
        match self {
            Self::Line(line) => Some(line),
            Self::Arc(_) => None,
        }
    }

    /// Returns the arc, if this primitive is one.
    #[must_use]
    pub fn as_arc(&self) -> Option<&Arc> {
        match self {
            Self::Arc(arc) => Some(arc),
            Self::Line(_) => None,
        }
    }
}

impl Curve for Primitive {
    fn evaluate(&self, t: f64) -> Point2 {
        match self {
            Self::Line(line) => line.evaluate(t),
            Self::Arc(arc) => arc.evaluate(t),
        }
    }

    fn tangent(&self, t: f64) -> Vector2 {
        match self {
            Self::Line(line) => line.tangent(t),
            Self::Arc(arc) => arc.tangent(t),
        }
    }

    fn length(&self) -> f64 {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => arc.length(),
        }
    }
}

impl From<LineSegment> for Primitive {
    fn from(line: LineSegment) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for Primitive {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}
