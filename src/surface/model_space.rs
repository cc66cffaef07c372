use slotmap::SlotMap;
use tracing::trace;

use crate::error::{Result, SurfaceError};
use crate::geometry::{Arc, LineSegment, Primitive};
use crate::math::Point2;
use crate::operations::query::{Aabb, BoundingBox};

use super::{DraftingSurface, EntityId};

/// An in-memory drafting surface.
///
/// Entities live in an arena keyed by generational [`EntityId`]s and are
/// kept in draw order. The surface also tracks drawing limits and the
/// current view window.
#[derive(Debug)]
pub struct ModelSpace {
    entities: SlotMap<EntityId, Primitive>,
    order: Vec<EntityId>,
    limits: Aabb,
    view: Option<Aabb>,
}

impl Default for ModelSpace {
    fn default() -> Self {
        Self::with_limits(Aabb::new(Point2::new(0.0, 0.0), Point2::new(12.0, 9.0)))
    }
}

impl ModelSpace {
    /// Creates an empty model space with the default 12 × 9 limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty model space with the given drawing limits.
    #[must_use]
    pub fn with_limits(limits: Aabb) -> Self {
        Self {
            entities: SlotMap::with_key(),
            order: Vec::new(),
            limits,
            view: None,
        }
    }

    /// Inserts a primitive and returns its handle.
    pub fn insert(&mut self, primitive: Primitive) -> EntityId {
        let id = self.entities.insert(primitive);
        self.order.push(id);
        trace!(?id, "entity added");
        id
    }

    /// Iterates over the primitives in draw order.
    pub fn entities(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.order.iter().filter_map(|id| self.entities.get(*id))
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the drawing limits.
    #[must_use]
    pub fn limits(&self) -> Aabb {
        self.limits
    }

    /// Returns the current view window, if the view has been fitted.
    #[must_use]
    pub fn view(&self) -> Option<Aabb> {
        self.view
    }

    /// Returns the bounds of all drawn content.
    #[must_use]
    pub fn extents(&self) -> Option<Aabb> {
        BoundingBox::new(self.entities().copied()).execute()
    }
}

impl DraftingSurface for ModelSpace {
    fn add_line(&mut self, start: Point2, end: Point2) -> Result<EntityId> {
        Ok(self.insert(LineSegment::new(start, end).into()))
    }

    fn add_arc(
        &mut self,
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<EntityId> {
        let arc = Arc::new(center, radius, start_angle, end_angle)?;
        Ok(self.insert(arc.into()))
    }

    fn zoom_extents(&mut self) -> Result<()> {
        let extents = self.extents().ok_or(SurfaceError::EmptyExtents)?;
        self.view = Some(extents);
        Ok(())
    }

    fn zoom_all(&mut self) -> Result<()> {
        let view = match self.extents() {
            Some(extents) => self.limits.union(&extents),
            None => self.limits,
        };
        self.view = Some(view);
        Ok(())
    }
}
