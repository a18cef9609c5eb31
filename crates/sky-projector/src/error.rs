//! Error types for sphere projection.

use thiserror::Error;

/// Result type alias using ProjectionError.
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors raised while projecting an image onto the sphere.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// A parameterized but unimplemented feature was requested.
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),

    /// The resolution parameter was rejected by the pixelization scheme.
    #[error(transparent)]
    InvalidResolution(#[from] healpix_grid::GridError),

    /// The projection has nothing to resample: the image has no samples
    /// or the footprint contains no sphere cells. Surfaced explicitly
    /// because a silently all-zero map would be indistinguishable from a
    /// legitimate all-zero image.
    #[error("empty projection: {0}")]
    EmptyProjection(String),

    /// Center or extent parameters outside the documented conventions.
    #[error("malformed footprint: {0}")]
    MalformedFootprint(String),

    /// Image data does not fit the declared dimensions.
    #[error("image shape mismatch: {rows}x{cols} grid cannot hold {len} values")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    /// A stacked layer disagrees with the shape of the first layer.
    #[error("layer {index} has shape {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    LayerShapeMismatch {
        index: usize,
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    /// Interpolation inputs are inconsistent.
    #[error("interpolation error: {0}")]
    Interpolation(String),
}
