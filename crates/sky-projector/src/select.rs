//! Cell selection: which sphere cells fall inside a footprint.

use healpix_grid::Pixelization;
use rayon::prelude::*;

use crate::footprint::Footprint;

/// The cells kept by the footprint mask, in natural index order.
///
/// The three vectors are parallel: `colat[i]` and `az[i]` are the
/// angular center of cell `indices[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSelection {
    pub indices: Vec<usize>,
    pub colat: Vec<f64>,
    pub az: Vec<f64>,
}

impl CellSelection {
    /// Number of selected cells.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when the footprint caught no cells.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Query points for interpolation, one (colatitude, azimuth) per cell.
    pub fn query_points(&self) -> Vec<(f64, f64)> {
        self.colat.iter().copied().zip(self.az.iter().copied()).collect()
    }
}

/// Evaluate the footprint mask over every cell of the grid and compress
/// to the kept subset.
///
/// Each cell is tested independently, so the full-sphere pass is
/// parallelized; the ordered parallel collect preserves the grid's
/// natural enumeration order.
pub fn select_cells<G>(grid: &G, footprint: &Footprint) -> CellSelection
where
    G: Pixelization + Sync,
{
    let kept: Vec<(usize, f64, f64)> = (0..grid.npix())
        .into_par_iter()
        .filter_map(|ipix| {
            let (colat, az) = grid.cell_angles(ipix);
            footprint.contains(colat, az).then_some((ipix, colat, az))
        })
        .collect();

    let mut selection = CellSelection {
        indices: Vec::with_capacity(kept.len()),
        colat: Vec::with_capacity(kept.len()),
        az: Vec::with_capacity(kept.len()),
    };
    for (ipix, colat, az) in kept {
        selection.indices.push(ipix);
        selection.colat.push(colat);
        selection.az.push(az);
    }
    selection
}
