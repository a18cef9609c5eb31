//! HEALPix RING pixelization wrapper.
//!
//! The projector only ever asks two things of the pixelization scheme:
//! how many cells cover the sphere at a given resolution, and where the
//! center of a given cell sits in (colatitude, azimuth). This crate
//! wraps the `scorus` HEALPix RING functions behind a validated grid
//! type and a small trait so those two operations can be faked in tests.

pub mod error;
pub mod ring;

pub use error::{GridError, Result};
pub use ring::{Pixelization, RingGrid};
