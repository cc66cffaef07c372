use thiserror::Error;

/// Top-level error type for the serpentine crate.
#[derive(Debug, Error)]
pub enum SerpentineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Errors related to geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised while validating or generating a coil layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid parameter {field} = {value}: must be a finite value greater than zero")]
    InvalidParameter { field: &'static str, value: f64 },

    #[error("pitch {pitch} exceeds height {height}: the coil would have no loops")]
    PitchExceedsHeight { pitch: f64, height: f64 },

    #[error("pitch {pitch} is too small for height {height}: more than {max} loops")]
    TooManyLoops { pitch: f64, height: f64, max: usize },
}

/// Errors raised by a drafting surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("could not attach to drawing: {0}")]
    Attach(String),

    #[error("drawing format error: {0}")]
    Dxf(#[from] dxf::DxfError),

    #[error("drawing file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("drawing has no content to fit the view to")]
    EmptyExtents,
}

/// Convenience type alias for results using [`SerpentineError`].
pub type Result<T> = std::result::Result<T, SerpentineError>;
