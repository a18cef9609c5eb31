//! Sample grid: one angular coordinate per image pixel.

use std::f64::consts::PI;

use crate::footprint::Footprint;

const TWO_PI: f64 = 2.0 * PI;

/// `n` values linearly spaced over `[start, stop]`, inclusive on both ends.
///
/// A single-point axis takes the lower bound.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Build the flattened (colatitude, azimuth) sample grid for a
/// `rows` × `cols` image spanning the footprint.
///
/// The colatitude axis has `rows` points and the azimuth axis `cols`
/// points; the cross product is flattened row-major so that sample
/// `r * cols + c` lines up with the mirrored image flattening. In the
/// wraparound case negative azimuths are shifted into `[0, 2π)` to match
/// the pixelization's canonical range.
pub fn sample_grid(footprint: &Footprint, rows: usize, cols: usize) -> Vec<(f64, f64)> {
    let colats = linspace(footprint.colat_min, footprint.colat_max, rows);
    let mut azimuths = linspace(footprint.az_min, footprint.az_max, cols);
    if footprint.wraps() {
        for az in &mut azimuths {
            if *az < 0.0 {
                *az += TWO_PI;
            }
        }
    }

    let mut points = Vec::with_capacity(rows * cols);
    for &colat in &colats {
        for &az in &azimuths {
            points.push((colat, az));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_approx_eq;

    #[test]
    fn test_linspace_hits_both_endpoints() {
        let axis = linspace(1.0, 2.0, 5);
        assert_eq!(axis.len(), 5);
        assert_approx_eq!(axis[0], 1.0, 1e-12);
        assert_approx_eq!(axis[4], 2.0, 1e-12);
        assert_approx_eq!(axis[2], 1.5, 1e-12);
    }

    #[test]
    fn test_linspace_degenerate_lengths() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn test_grid_is_row_major_with_axis_lengths_from_image_shape() {
        let fp = Footprint::from_center(90.0, 180.0, 20.0, 40.0).unwrap();
        let points = sample_grid(&fp, 2, 3);
        assert_eq!(points.len(), 6);

        // First row: constant colatitude, azimuth sweeping min to max.
        assert_approx_eq!(points[0].0, fp.colat_min, 1e-12);
        assert_approx_eq!(points[0].1, fp.az_min, 1e-12);
        assert_approx_eq!(points[2].1, fp.az_max, 1e-12);

        // Second row jumps to the next colatitude.
        assert_approx_eq!(points[3].0, fp.colat_max, 1e-12);
        assert_approx_eq!(points[3].1, fp.az_min, 1e-12);
    }

    #[test]
    fn test_wraparound_normalizes_azimuths() {
        let fp = Footprint::from_center(90.0, 0.0, 10.0, 30.0).unwrap();
        assert!(fp.wraps());
        let points = sample_grid(&fp, 3, 8);
        for &(_, az) in &points {
            assert!(
                (0.0..TWO_PI).contains(&az),
                "sample azimuth {} outside canonical [0, 2pi)",
                az
            );
        }
        // Azimuths from both sides of the origin are present.
        assert!(points.iter().any(|&(_, az)| az > 3.0 * PI / 2.0));
        assert!(points.iter().any(|&(_, az)| az < PI / 2.0));
    }

    #[test]
    fn test_no_wraparound_leaves_azimuths_untouched() {
        let fp = Footprint::from_center(90.0, 180.0, 10.0, 30.0).unwrap();
        let points = sample_grid(&fp, 2, 4);
        assert_approx_eq!(points[0].1, fp.az_min, 1e-12);
        assert_approx_eq!(points[3].1, fp.az_max, 1e-12);
    }
}
