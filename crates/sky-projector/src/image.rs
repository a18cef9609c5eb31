//! Row-major image container.

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// A rectangular grid of intensities in row-major order.
///
/// Row index corresponds to the colatitude direction and column index to
/// the azimuth direction of the footprint. Image columns run opposite to
/// increasing azimuth, so sampling flattens through
/// [`ImageGrid::mirrored_values`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGrid {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl ImageGrid {
    /// Create an image from row-major data.
    ///
    /// # Errors
    /// `ShapeMismatch` when `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(ProjectionError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create an image from nested rows; all rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            if row.len() != n_cols {
                return Err(ProjectionError::ShapeMismatch {
                    rows: n_rows,
                    cols: n_cols,
                    len: rows.iter().map(Vec::len).sum(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(data, n_rows, n_cols)
    }

    /// Number of rows (colatitude direction).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (azimuth direction).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the image holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw row-major values.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// Row-major flattening with the column order of every row reversed.
    ///
    /// This corrects the mismatch between image-column direction and
    /// increasing-azimuth direction before the samples are paired with
    /// the azimuth axis of the sample grid.
    pub fn mirrored_values(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(self.cols.max(1)) {
            out.extend(row.iter().rev());
        }
        out
    }
}
