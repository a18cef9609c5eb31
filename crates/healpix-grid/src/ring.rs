//! RING-ordered HEALPix grid at a fixed resolution.
//!
//! HEALPix partitions the sphere into `12 * nside^2` equal-area cells,
//! with `nside` restricted to powers of two. RING ordering enumerates
//! cells along rings of constant colatitude, north to south, with
//! azimuth increasing along each ring.

use scorus::healpix::pix::pix2ang_ring;
use scorus::healpix::utils::nside2npix;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Interface of a spherical pixelization scheme.
///
/// Anything that can count its cells and report the angular center of
/// each one can stand in for HEALPix, which keeps the selection logic
/// testable against tiny hand-built grids.
pub trait Pixelization {
    /// Total number of cells covering the sphere.
    fn npix(&self) -> usize;

    /// Angular center of cell `ipix`: (colatitude, azimuth) in radians.
    ///
    /// Colatitude is 0 at the north pole and π at the south pole;
    /// azimuth is in `[0, 2π)`.
    fn cell_angles(&self, ipix: usize) -> (f64, f64);
}

/// A RING-ordered HEALPix grid with a validated resolution parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingGrid {
    nside: usize,
}

impl RingGrid {
    /// Create a grid for the given nside.
    ///
    /// # Errors
    /// `InvalidNside` unless `nside` is a non-zero power of two.
    pub fn new(nside: usize) -> Result<Self> {
        if nside == 0 || !nside.is_power_of_two() {
            return Err(GridError::InvalidNside(nside));
        }
        Ok(Self { nside })
    }

    /// The resolution parameter.
    pub fn nside(&self) -> usize {
        self.nside
    }
}

impl Pixelization for RingGrid {
    fn npix(&self) -> usize {
        nside2npix(self.nside)
    }

    fn cell_angles(&self, ipix: usize) -> (f64, f64) {
        debug_assert!(ipix < self.npix(), "cell index {} out of range", ipix);
        let sph = pix2ang_ring::<f64>(self.nside, ipix);
        (sph.pol, sph.az)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use test_utils::{assert_angles_approx_eq, assert_approx_eq};

    #[test]
    fn test_nside_must_be_power_of_two() {
        assert!(RingGrid::new(1).is_ok());
        assert!(RingGrid::new(64).is_ok());
        assert!(matches!(RingGrid::new(0), Err(GridError::InvalidNside(0))));
        assert!(matches!(RingGrid::new(3), Err(GridError::InvalidNside(3))));
        assert!(matches!(RingGrid::new(12), Err(GridError::InvalidNside(12))));
    }

    #[test]
    fn test_npix_is_twelve_nside_squared() {
        assert_eq!(RingGrid::new(1).unwrap().npix(), 12);
        assert_eq!(RingGrid::new(2).unwrap().npix(), 48);
        assert_eq!(RingGrid::new(16).unwrap().npix(), 3072);
    }

    #[test]
    fn test_nside1_cell_centers() {
        let grid = RingGrid::new(1).unwrap();

        // North polar ring: colatitude acos(2/3), azimuths at odd multiples of pi/4.
        let (colat, az) = grid.cell_angles(0);
        assert_angles_approx_eq!((colat, az), ((2.0f64 / 3.0).acos(), PI / 4.0), 1e-12);

        // Equatorial ring starts at azimuth 0.
        let (colat, az) = grid.cell_angles(4);
        assert_angles_approx_eq!((colat, az), (PI / 2.0, 0.0), 1e-12);

        let (_, az) = grid.cell_angles(6);
        assert_approx_eq!(az, PI, 1e-12);

        // South polar ring mirrors the north one.
        let (colat, az) = grid.cell_angles(11);
        assert_angles_approx_eq!((colat, az), ((-2.0f64 / 3.0).acos(), 7.0 * PI / 4.0), 1e-12);
    }

    #[test]
    fn test_all_angles_within_convention() {
        let grid = RingGrid::new(4).unwrap();
        for ipix in 0..grid.npix() {
            let (colat, az) = grid.cell_angles(ipix);
            assert!(colat > 0.0 && colat < PI, "cell {} colatitude {} outside (0, pi)", ipix, colat);
            assert!((0.0..2.0 * PI).contains(&az), "cell {} azimuth {} outside [0, 2pi)", ipix, az);
        }
    }

    #[test]
    fn test_ring_order_colatitude_nondecreasing() {
        let grid = RingGrid::new(2).unwrap();
        let mut prev = 0.0;
        for ipix in 0..grid.npix() {
            let (colat, _) = grid.cell_angles(ipix);
            assert!(colat >= prev - 1e-12, "RING order should walk north to south");
            prev = colat;
        }
    }
}
