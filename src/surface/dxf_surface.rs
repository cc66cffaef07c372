use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use dxf::entities::{Entity, EntityType};
use dxf::Drawing;
use tracing::{debug, info, warn};

use crate::error::{Result, SurfaceError};
use crate::geometry::{Arc, LineSegment};
use crate::math::Point2;
use crate::operations::query::Aabb;

use super::{attach_or_create, DraftingSurface, EntityId, ModelSpace};

/// A drafting surface backed by a DXF drawing file.
///
/// Every primitive is written to the drawing as a native `LINE` or `ARC`
/// entity and mirrored in a [`ModelSpace`], which answers extents queries.
/// DXF stores arc angles in degrees; conversion happens here.
pub struct DxfSurface {
    path: PathBuf,
    drawing: Drawing,
    model: ModelSpace,
}

impl DxfSurface {
    /// Attaches to the drawing already stored at `path`.
    ///
    /// Existing `LINE` and `ARC` entities are kept and count toward extents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or is not a readable drawing.
    pub fn attach(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SurfaceError::Attach(format!("{} does not exist", path.display())).into());
        }
        let mut reader = BufReader::new(File::open(path).map_err(SurfaceError::from)?);
        let drawing = Drawing::load(&mut reader).map_err(SurfaceError::from)?;

        let mut model = ModelSpace::new();
        for entity in drawing.entities() {
            match &entity.specific {
                EntityType::Line(line) => {
                    model.insert(
                        LineSegment::new(
                            Point2::new(line.p1.x, line.p1.y),
                            Point2::new(line.p2.x, line.p2.y),
                        )
                        .into(),
                    );
                }
                EntityType::Arc(arc) => {
                    match Arc::new(
                        Point2::new(arc.center.x, arc.center.y),
                        arc.radius,
                        arc.start_angle.to_radians(),
                        arc.end_angle.to_radians(),
                    ) {
                        Ok(a) => {
                            model.insert(a.into());
                        }
                        Err(err) => warn!(%err, "skipping unreadable arc"),
                    }
                }
                _ => {}
            }
        }
        info!(path = %path.display(), entities = model.len(), "attached to drawing");

        Ok(Self {
            path: path.to_path_buf(),
            drawing,
            model,
        })
    }

    /// Starts a new, empty drawing that will be saved to `path`.
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Result` to match [`DxfSurface::attach`].
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        info!(path = %path.display(), "created new drawing");
        Ok(Self {
            path,
            drawing: Drawing::new(),
            model: ModelSpace::new(),
        })
    }

    /// Attaches to the drawing at `path` if there is one, else starts a new one.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists at `path` but cannot be read as a
    /// drawing, or if a new drawing cannot be started.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        attach_or_create(|| Self::attach(path), || Self::create(path))
    }

    /// Writes the drawing to its file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path).map_err(SurfaceError::from)?);
        self.drawing.save(&mut writer).map_err(SurfaceError::from)?;
        debug!(path = %self.path.display(), "drawing saved");
        Ok(())
    }

    /// Returns the file the drawing is saved to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the in-memory mirror of the drawing's entities.
    #[must_use]
    pub fn model(&self) -> &ModelSpace {
        &self.model
    }

    /// Returns the underlying DXF drawing.
    #[must_use]
    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    fn apply_view(&mut self) {
        if let Some(view) = self.model.view() {
            set_extents(&mut self.drawing, &view);
        }
    }
}

fn to_dxf_point(p: &Point2) -> dxf::Point {
    dxf::Point::new(p.x, p.y, 0.0)
}

fn set_extents(drawing: &mut Drawing, view: &Aabb) {
    drawing.header.minimum_drawing_extents = to_dxf_point(&view.min);
    drawing.header.maximum_drawing_extents = to_dxf_point(&view.max);
}

impl DraftingSurface for DxfSurface {
    fn add_line(&mut self, start: Point2, end: Point2) -> Result<EntityId> {
        let line = dxf::entities::Line::new(to_dxf_point(&start), to_dxf_point(&end));
        self.drawing.add_entity(Entity::new(EntityType::Line(line)));
        self.model.add_line(start, end)
    }

    fn add_arc(
        &mut self,
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<EntityId> {
        // Validate before touching the drawing.
        let id = self.model.add_arc(center, radius, start_angle, end_angle)?;
        let arc = dxf::entities::Arc::new(
            to_dxf_point(&center),
            radius,
            start_angle.to_degrees(),
            end_angle.to_degrees(),
        );
        self.drawing.add_entity(Entity::new(EntityType::Arc(arc)));
        Ok(id)
    }

    fn zoom_extents(&mut self) -> Result<()> {
        self.model.zoom_extents()?;
        self.apply_view();
        Ok(())
    }

    fn zoom_all(&mut self) -> Result<()> {
        self.model.zoom_all()?;
        self.apply_view();
        Ok(())
    }
}
