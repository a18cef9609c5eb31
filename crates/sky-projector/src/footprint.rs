//! Angular footprint of a projected image.
//!
//! The footprint is the rectangular (colatitude × azimuth) region the
//! image is mapped into, derived from a center and full angular extents
//! given in degrees. A negative `az_min` signals that the region
//! straddles the 0/2π azimuth boundary.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

const TWO_PI: f64 = 2.0 * PI;

/// Radian bounds of the region an image lands in on the sphere.
///
/// Invariant: `colat_min < colat_max`. `az_min` may be negative, in
/// which case the azimuth range wraps through zero; membership is then
/// decided by [`AzimuthRange::Wrapped`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub colat_min: f64,
    pub colat_max: f64,
    pub az_min: f64,
    pub az_max: f64,
}

impl Footprint {
    /// Build a footprint from a center and full angular extents, all in degrees.
    ///
    /// # Arguments
    /// * `theta_c_deg` - center colatitude, 0 (north pole) ..= 180 (south pole)
    /// * `phi_c_deg` - center azimuth, 0 ..= 360
    /// * `delta_theta_deg` - full colatitude extent, > 0
    /// * `delta_phi_deg` - full azimuth extent, > 0
    ///
    /// # Errors
    /// `MalformedFootprint` for non-positive extents or a center outside
    /// the angle conventions. Colatitude bounds are allowed to overshoot
    /// `[0, π]` for pole-centered images; the cell filter keeps nothing
    /// past the poles.
    pub fn from_center(
        theta_c_deg: f64,
        phi_c_deg: f64,
        delta_theta_deg: f64,
        delta_phi_deg: f64,
    ) -> Result<Self> {
        if !(delta_theta_deg > 0.0) || !(delta_phi_deg > 0.0) {
            return Err(ProjectionError::MalformedFootprint(format!(
                "extents must be positive, got {}x{} degrees",
                delta_theta_deg, delta_phi_deg
            )));
        }
        if !(0.0..=180.0).contains(&theta_c_deg) {
            return Err(ProjectionError::MalformedFootprint(format!(
                "center colatitude {} degrees outside [0, 180]",
                theta_c_deg
            )));
        }
        if !(0.0..=360.0).contains(&phi_c_deg) {
            return Err(ProjectionError::MalformedFootprint(format!(
                "center azimuth {} degrees outside [0, 360]",
                phi_c_deg
            )));
        }

        Ok(Self {
            colat_min: (theta_c_deg - delta_theta_deg / 2.0).to_radians(),
            colat_max: (theta_c_deg + delta_theta_deg / 2.0).to_radians(),
            az_min: (phi_c_deg - delta_phi_deg / 2.0).to_radians(),
            az_max: (phi_c_deg + delta_phi_deg / 2.0).to_radians(),
        })
    }

    /// True when the azimuth range straddles the 0/2π boundary.
    pub fn wraps(&self) -> bool {
        self.az_min < 0.0
    }

    /// The azimuth membership strategy for this footprint.
    pub fn azimuth_range(&self) -> AzimuthRange {
        if self.wraps() {
            AzimuthRange::Wrapped {
                min: self.az_min,
                max: self.az_max,
            }
        } else {
            AzimuthRange::Simple {
                min: self.az_min,
                max: self.az_max,
            }
        }
    }

    /// Whether a cell center at (colatitude, azimuth) lies inside the footprint.
    pub fn contains(&self, colat: f64, az: f64) -> bool {
        colat >= self.colat_min && colat <= self.colat_max && self.azimuth_range().contains(az)
    }
}

/// Azimuth interval membership, split into the two wraparound regimes.
///
/// Modeling the branch as data keeps the wraparound rule independently
/// testable instead of buried in the selection loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AzimuthRange {
    /// `az_min >= 0`: plain inclusive interval `[min, max]`.
    Simple { min: f64, max: f64 },
    /// `az_min < 0`: the true range is `[2π+min, 2π) ∪ [0, max]`. A cell
    /// is kept unless its azimuth lies strictly inside the complementary
    /// arc `(max, 2π+min)`; both wrapped endpoints are kept.
    Wrapped { min: f64, max: f64 },
}

impl AzimuthRange {
    /// Membership test for an azimuth in canonical `[0, 2π)`.
    pub fn contains(&self, az: f64) -> bool {
        match *self {
            AzimuthRange::Simple { min, max } => az >= min && az <= max,
            AzimuthRange::Wrapped { min, max } => !(az > max && az < TWO_PI + min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_approx_eq;

    #[test]
    fn test_from_center_converts_degrees_to_radians() {
        let fp = Footprint::from_center(90.0, 180.0, 30.0, 40.0).unwrap();
        assert_approx_eq!(fp.colat_min, 75.0f64.to_radians(), 1e-12);
        assert_approx_eq!(fp.colat_max, 105.0f64.to_radians(), 1e-12);
        assert_approx_eq!(fp.az_min, 160.0f64.to_radians(), 1e-12);
        assert_approx_eq!(fp.az_max, 200.0f64.to_radians(), 1e-12);
        assert!(!fp.wraps());
    }

    #[test]
    fn test_footprint_wraps_when_center_near_zero_azimuth() {
        let fp = Footprint::from_center(90.0, 0.0, 30.0, 30.0).unwrap();
        assert!(fp.wraps());
        assert!(fp.az_min < 0.0);
        assert_approx_eq!(fp.az_max, 15.0f64.to_radians(), 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_extents() {
        assert!(matches!(
            Footprint::from_center(90.0, 0.0, 0.0, 30.0),
            Err(ProjectionError::MalformedFootprint(_))
        ));
        assert!(matches!(
            Footprint::from_center(90.0, 0.0, 30.0, -5.0),
            Err(ProjectionError::MalformedFootprint(_))
        ));
    }

    #[test]
    fn test_rejects_center_outside_conventions() {
        assert!(matches!(
            Footprint::from_center(190.0, 0.0, 10.0, 10.0),
            Err(ProjectionError::MalformedFootprint(_))
        ));
        assert!(matches!(
            Footprint::from_center(90.0, 370.0, 10.0, 10.0),
            Err(ProjectionError::MalformedFootprint(_))
        ));
        assert!(matches!(
            Footprint::from_center(-1.0, 0.0, 10.0, 10.0),
            Err(ProjectionError::MalformedFootprint(_))
        ));
    }

    #[test]
    fn test_pole_centered_footprint_is_allowed() {
        let fp = Footprint::from_center(0.0, 180.0, 20.0, 20.0).unwrap();
        assert!(fp.colat_min < 0.0);
        // Nothing sits above the pole, so the overshoot is harmless.
        assert!(fp.contains(5.0f64.to_radians(), 180.0f64.to_radians()));
    }

    #[test]
    fn test_simple_range_is_inclusive_on_both_ends() {
        let range = AzimuthRange::Simple { min: 1.0, max: 2.0 };
        assert!(range.contains(1.0));
        assert!(range.contains(2.0));
        assert!(range.contains(1.5));
        assert!(!range.contains(0.999));
        assert!(!range.contains(2.001));
    }

    #[test]
    fn test_wrapped_range_keeps_both_sides_of_origin() {
        // Footprint azimuth [-0.2, 0.3] wrapped: keep [2pi-0.2, 2pi) and [0, 0.3].
        let range = AzimuthRange::Wrapped { min: -0.2, max: 0.3 };
        assert!(range.contains(0.0));
        assert!(range.contains(0.25));
        assert!(range.contains(TWO_PI - 0.1));
        assert!(!range.contains(3.0), "azimuth inside the complementary arc must be excluded");
        assert!(!range.contains(TWO_PI - 0.3));
    }

    #[test]
    fn test_wrapped_range_boundary_inclusivity() {
        // Only the strictly interior complementary arc is excluded, so
        // both arc endpoints stay in.
        let range = AzimuthRange::Wrapped { min: -0.2, max: 0.3 };
        assert!(range.contains(0.3));
        assert!(range.contains(TWO_PI - 0.2));
        assert!(!range.contains(0.3 + 1e-9));
        assert!(!range.contains(TWO_PI - 0.2 - 1e-9));
    }
}
