//! Deterministic synthetic image generators.
//!
//! These produce predictable, verifiable intensity patterns used across
//! the projection test suite. All return row-major `Vec<f64>` data to be
//! wrapped in an `ImageGrid` by the caller.

/// Creates an image filled with a constant value.
///
/// Useful for footprint-coverage tests: every cell inside the footprint
/// must end up carrying exactly this value.
pub fn constant_image(rows: usize, cols: usize, value: f64) -> Vec<f64> {
    vec![value; rows * cols]
}

/// Creates an image whose value equals its column index.
///
/// Makes azimuth-orientation (mirroring) checks trivial: after
/// projection, the intensity must decrease with increasing azimuth.
pub fn column_ramp_image(rows: usize, cols: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(rows * cols);
    for _row in 0..rows {
        for col in 0..cols {
            data.push(col as f64);
        }
    }
    data
}

/// Creates an image whose value equals its row index.
///
/// The counterpart of [`column_ramp_image`] for the colatitude axis,
/// which is not mirrored.
pub fn row_ramp_image(rows: usize, cols: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for _col in 0..cols {
            data.push(row as f64);
        }
    }
    data
}

/// Creates an image with a unique value per pixel: `row * 1000 + col`.
///
/// Lets a test recover exactly which source pixel a sphere cell was
/// assigned from.
pub fn indexed_image(rows: usize, cols: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            data.push((row * 1000 + col) as f64);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_image() {
        let data = constant_image(3, 4, 5.0);
        assert_eq!(data.len(), 12);
        assert!(data.iter().all(|&v| v == 5.0));
    }

    #[test]
    fn test_column_ramp_is_row_major() {
        let data = column_ramp_image(2, 3);
        assert_eq!(data, vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_row_ramp_is_row_major() {
        let data = row_ramp_image(2, 3);
        assert_eq!(data, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_indexed_image_values_are_unique() {
        let data = indexed_image(3, 3);
        assert_eq!(data[0], 0.0);
        assert_eq!(data[1], 1.0);
        assert_eq!(data[3], 1000.0);
        assert_eq!(data[8], 2002.0);
    }
}
