//! Error types for the HEALPix grid wrapper.

use thiserror::Error;

/// Result type alias using GridError.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised by the pixelization wrapper.
#[derive(Debug, Error)]
pub enum GridError {
    /// The resolution parameter is not in HEALPix's valid set.
    #[error("invalid nside {0}: must be a non-zero power of two")]
    InvalidNside(usize),
}
