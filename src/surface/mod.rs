//! Drafting surfaces: the host side that renders coil primitives.
//!
//! The layout generator never touches a surface. Callers hold a surface
//! handle explicitly and feed it primitives through [`emit_layout`].

mod dxf_surface;
mod emit;
mod model_space;

pub use dxf_surface::DxfSurface;
pub use emit::{emit_layout, submit, EmitReport};
pub use model_space::ModelSpace;

use tracing::{info, warn};

use crate::error::{Result, SerpentineError, SurfaceError};
use crate::math::Point2;

slotmap::new_key_type! {
    /// Handle of an entity drawn on a surface.
    pub struct EntityId;
}

/// A host capable of drawing line and arc primitives.
pub trait DraftingSurface {
    /// Draws a straight segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the entity.
    fn add_line(&mut self, start: Point2, end: Point2) -> Result<EntityId>;

    /// Draws a counter-clockwise arc; angles in radians from the positive x-axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or the host rejects the entity.
    fn add_arc(
        &mut self,
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<EntityId>;

    /// Fits the view to the drawn content.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no content to fit.
    fn zoom_extents(&mut self) -> Result<()>;

    /// Fits the view to the drawing limits and any content beyond them.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot change its view.
    fn zoom_all(&mut self) -> Result<()>;
}

/// Which view fit a surface ended up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    Extents,
    All,
}

/// Fits the view to content, falling back to the drawing limits.
///
/// # Errors
///
/// Returns the `zoom_all` error if both attempts fail.
pub fn fit_view<S: DraftingSurface + ?Sized>(surface: &mut S) -> Result<FitMode> {
    match surface.zoom_extents() {
        Ok(()) => Ok(FitMode::Extents),
        Err(err) => {
            warn!(%err, "zoom to extents failed, zooming to limits");
            surface.zoom_all()?;
            Ok(FitMode::All)
        }
    }
}

/// Attaches to an existing session, creating a fresh one if there is none.
///
/// Only [`SurfaceError::Attach`] triggers the fallback. Any other attach
/// failure means a session exists but could not be read, and is returned
/// as-is so the caller never replaces it.
///
/// # Errors
///
/// Returns a non-`Attach` error from `attach`, or the `create` error.
pub fn attach_or_create<S, A, C>(attach: A, create: C) -> Result<S>
where
    A: FnOnce() -> Result<S>,
    C: FnOnce() -> Result<S>,
{
    match attach() {
        Ok(surface) => {
            info!("attached to existing drawing");
            Ok(surface)
        }
        Err(err @ SerpentineError::Surface(SurfaceError::Attach(_))) => {
            info!(%err, "no drawing to attach to, creating a new one");
            create()
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn attach_wins_when_available() {
        let mut created = false;
        let surface = attach_or_create(
            || Ok(ModelSpace::new()),
            || {
                created = true;
                Ok(ModelSpace::new())
            },
        )
        .unwrap();
        assert!(!created);
        assert_eq!(surface.len(), 0);
    }

    #[test]
    fn create_runs_after_failed_attach() {
        let surface = attach_or_create(
            || Err(SurfaceError::Attach("no session".into()).into()),
            || {
                let mut space = ModelSpace::new();
                space.add_line(Point2::origin(), Point2::new(1.0, 0.0))?;
                Ok(space)
            },
        )
        .unwrap();
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn create_error_is_reported() {
        let result: Result<ModelSpace> = attach_or_create(
            || Err(SurfaceError::Attach("no session".into()).into()),
            || Err(SurfaceError::Attach("cannot create".into()).into()),
        );
        let err = result.unwrap_err();
        assert!(matches!(err, SerpentineError::Surface(SurfaceError::Attach(_))));
        assert!(err.to_string().contains("cannot create"));
    }

    #[test]
    fn unreadable_session_is_not_replaced() {
        let mut created = false;
        let result: Result<ModelSpace> = attach_or_create(
            || Err(SurfaceError::Io(std::io::Error::other("corrupt")).into()),
            || {
                created = true;
                Ok(ModelSpace::new())
            },
        );
        assert!(!created);
        assert!(matches!(
            result.unwrap_err(),
            SerpentineError::Surface(SurfaceError::Io(_))
        ));
    }

    #[test]
    fn empty_surface_falls_back_to_zoom_all() {
        let mut space = ModelSpace::new();
        assert_eq!(fit_view(&mut space).unwrap(), FitMode::All);
        assert_eq!(space.view(), Some(space.limits()));
    }

    #[test]
    fn drawn_surface_zooms_to_extents() {
        let mut space = ModelSpace::new();
        space
            .add_line(Point2::new(1.0, 1.0), Point2::new(2.0, 3.0))
            .unwrap();
        assert_eq!(fit_view(&mut space).unwrap(), FitMode::Extents);
        let view = space.view().unwrap();
        assert_eq!(view.min, Point2::new(1.0, 1.0));
        assert_eq!(view.max, Point2::new(2.0, 3.0));
    }
}
