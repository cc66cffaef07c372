use tracing::{debug, info};

use crate::error::Result;
use crate::geometry::{BoundaryRectangle, CoilPath, Primitive};

use super::{fit_view, DraftingSurface, EntityId, FitMode};

/// Progress is logged every this many loops.
const PROGRESS_INTERVAL: usize = 5;

/// Summary of one [`emit_layout`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitReport {
    pub loops: usize,
    pub lines: usize,
    pub arcs: usize,
    pub fit: FitMode,
}

/// Draws a single primitive on a surface.
///
/// # Errors
///
/// Returns the surface's error for the call.
pub fn submit<S: DraftingSurface + ?Sized>(surface: &mut S, primitive: &Primitive) -> Result<EntityId> {
    match primitive {
        Primitive::Line(line) => surface.add_line(*line.start(), *line.end()),
        Primitive::Arc(arc) => surface.add_arc(
            *arc.center(),
            arc.radius(),
            arc.start_angle(),
            arc.end_angle(),
        ),
    }
}

/// Draws a coil and its boundary, then fits the view.
///
/// Primitives go out one call each, in generation order: every loop's run
/// and turn, then the four boundary edges. The view is fitted to extents,
/// or to the drawing limits if that fails.
///
/// # Errors
///
/// Stops at the first surface error and returns it.
pub fn emit_layout<S: DraftingSurface + ?Sized>(
    surface: &mut S,
    path: &CoilPath,
    boundary: &BoundaryRectangle,
) -> Result<EmitReport> {
    info!(loops = path.loop_count(), "drawing coil");

    let mut lines = 0;
    let mut arcs = 0;
    for coil_loop in path.loops() {
        submit(surface, &Primitive::Line(coil_loop.line))?;
        submit(surface, &Primitive::Arc(coil_loop.arc))?;
        lines += 1;
        arcs += 1;

        let done = coil_loop.index + 1;
        if done % PROGRESS_INTERVAL == 0 {
            info!("completed {done} loops");
        }
    }

    debug!("adding boundary rectangle");
    for edge in boundary.primitives() {
        submit(surface, &edge)?;
        lines += 1;
    }

    let fit = fit_view(surface)?;
    debug!(?fit, "view fitted");

    Ok(EmitReport {
        loops: path.loop_count(),
        lines,
        arcs,
        fit,
    })
}
