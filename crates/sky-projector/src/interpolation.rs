//! Nearest-neighbor scattered interpolation in the (colatitude, azimuth) plane.

use rayon::prelude::*;

use crate::error::{ProjectionError, Result};

/// Assign each query point the value of its nearest sample point.
///
/// Distance is Euclidean in the flat (colatitude, azimuth) plane; the
/// caller is responsible for expressing sample and query azimuths in the
/// same canonical range. Queries are independent and evaluated in
/// parallel; ties resolve to the lowest sample index, so the result is
/// deterministic.
///
/// # Errors
/// * `EmptyProjection` when there are no sample points or no queries.
/// * `Interpolation` when `points` and `values` lengths disagree.
pub fn nearest_neighbor(
    points: &[(f64, f64)],
    values: &[f64],
    queries: &[(f64, f64)],
) -> Result<Vec<f64>> {
    if points.is_empty() {
        return Err(ProjectionError::EmptyProjection(
            "no sample points to interpolate from".to_string(),
        ));
    }
    if queries.is_empty() {
        return Err(ProjectionError::EmptyProjection(
            "no query points to interpolate onto".to_string(),
        ));
    }
    if points.len() != values.len() {
        return Err(ProjectionError::Interpolation(format!(
            "{} sample points but {} values",
            points.len(),
            values.len()
        )));
    }

    let result = queries
        .par_iter()
        .map(|&(q_colat, q_az)| {
            let mut best = 0usize;
            let mut best_dist = f64::INFINITY;
            for (i, &(colat, az)) in points.iter().enumerate() {
                let d_colat = colat - q_colat;
                let d_az = az - q_az;
                let dist = d_colat * d_colat + d_az * d_az;
                if dist < best_dist {
                    best_dist = dist;
                    best = i;
                }
            }
            values[best]
        })
        .collect();

    Ok(result)
}
