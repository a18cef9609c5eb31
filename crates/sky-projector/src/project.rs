//! Projection entry points: place an image (or a stack of images) onto a
//! full-sphere map.

use healpix_grid::{Pixelization, RingGrid};
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::footprint::Footprint;
use crate::image::ImageGrid;
use crate::interpolation::nearest_neighbor;
use crate::sample::sample_grid;
use crate::select::select_cells;

/// Euler angles (degrees) for rotating the projection on the sphere.
///
/// Accepted for interface parity with the footprint parameters only:
/// rotation is not implemented, and any placement carrying `Some(_)` is
/// rejected with [`ProjectionError::UnsupportedFeature`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub psi: f64,
    pub theta: f64,
    pub phi: f64,
}

/// Where the image lands on the sphere and how large it is. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Center colatitude, 0 (north pole) ..= 180 (south pole).
    pub center_colat: f64,
    /// Center azimuth, 0 ..= 360.
    pub center_az: f64,
    /// Full colatitude extent, > 0.
    pub extent_colat: f64,
    /// Full azimuth extent, > 0.
    pub extent_az: f64,
    /// Unsupported; must be `None`.
    pub rotation: Option<Rotation>,
}

impl Placement {
    /// Placement with no rotation.
    pub fn new(center_colat: f64, center_az: f64, extent_colat: f64, extent_az: f64) -> Self {
        Self {
            center_colat,
            center_az,
            extent_colat,
            extent_az,
            rotation: None,
        }
    }

    /// The radian footprint of this placement.
    pub fn footprint(&self) -> Result<Footprint> {
        Footprint::from_center(
            self.center_colat,
            self.center_az,
            self.extent_colat,
            self.extent_az,
        )
    }
}

/// Project a stack of same-shaped images sharing one placement.
///
/// The footprint, cell selection and sample grid are computed once; each
/// layer then gets its own nearest-neighbor pass and its own output map.
/// Cells outside the footprint stay zero.
///
/// # Errors
/// * `UnsupportedFeature` when the placement requests a rotation.
/// * `EmptyProjection` when there are no layers, the images are empty,
///   or the footprint selects no cells.
/// * `LayerShapeMismatch` when a layer's shape differs from the first.
pub fn project_stack<G>(
    layers: &[ImageGrid],
    grid: &G,
    placement: &Placement,
) -> Result<Vec<Vec<f64>>>
where
    G: Pixelization + Sync,
{
    if let Some(rot) = placement.rotation {
        return Err(ProjectionError::UnsupportedFeature(format!(
            "projection rotation is not implemented (requested {:?})",
            rot
        )));
    }

    let first = layers.first().ok_or_else(|| {
        ProjectionError::EmptyProjection("no image layers to project".to_string())
    })?;
    for (index, layer) in layers.iter().enumerate() {
        if layer.rows() != first.rows() || layer.cols() != first.cols() {
            return Err(ProjectionError::LayerShapeMismatch {
                index,
                rows: layer.rows(),
                cols: layer.cols(),
                expected_rows: first.rows(),
                expected_cols: first.cols(),
            });
        }
    }
    if first.is_empty() {
        return Err(ProjectionError::EmptyProjection(
            "image has no samples".to_string(),
        ));
    }

    let footprint = placement.footprint()?;
    let selection = select_cells(grid, &footprint);
    tracing::debug!(
        npix = grid.npix(),
        selected = selection.len(),
        wraps = footprint.wraps(),
        "evaluated footprint mask"
    );
    if selection.is_empty() {
        return Err(ProjectionError::EmptyProjection(
            "footprint does not intersect any cell of the grid".to_string(),
        ));
    }

    let samples = sample_grid(&footprint, first.rows(), first.cols());
    let queries = selection.query_points();

    let mut maps = Vec::with_capacity(layers.len());
    for layer in layers {
        let mirrored = layer.mirrored_values();
        let interpolated = nearest_neighbor(&samples, &mirrored, &queries)?;
        let mut map = vec![0.0; grid.npix()];
        for (&ipix, &value) in selection.indices.iter().zip(&interpolated) {
            map[ipix] = value;
        }
        maps.push(map);
    }
    Ok(maps)
}

/// Project a single image onto a full-sphere map.
///
/// See [`project_stack`] for the error conditions.
pub fn project_image<G>(img: &ImageGrid, grid: &G, placement: &Placement) -> Result<Vec<f64>>
where
    G: Pixelization + Sync,
{
    let mut maps = project_stack(std::slice::from_ref(img), grid, placement)?;
    maps.pop().ok_or_else(|| {
        ProjectionError::EmptyProjection("projection produced no map".to_string())
    })
}

/// Project an image onto a HEALPix RING map of the given nside.
///
/// Convenience wrapper over [`project_image`]: validates the resolution,
/// builds the placement, and returns the full-sphere map of length
/// `12 * nside^2` with the image resampled into its footprint and zero
/// elsewhere.
///
/// # Arguments
/// * `img` - image to project
/// * `nside` - HEALPix resolution parameter (power of two)
/// * `center_colat`, `center_az` - center of the image on the sphere, degrees
/// * `extent_colat`, `extent_az` - full angular size of the image, degrees
/// * `rotation` - unsupported; must be `None`
pub fn image_to_healpix(
    img: &ImageGrid,
    nside: usize,
    center_colat: f64,
    center_az: f64,
    extent_colat: f64,
    extent_az: f64,
    rotation: Option<Rotation>,
) -> Result<Vec<f64>> {
    let grid = RingGrid::new(nside)?;
    let placement = Placement {
        center_colat,
        center_az,
        extent_colat,
        extent_az,
        rotation,
    };
    project_image(img, &grid, &placement)
}
