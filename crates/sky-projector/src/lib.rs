//! Resampling of planar images onto full-sky HEALPix maps.
//!
//! Places a rectangular image at a given angular center and extent on
//! the sphere and assigns an intensity to every HEALPix cell inside that
//! footprint by nearest-neighbor lookup; the rest of the map stays zero.
//!
//! # Pipeline
//!
//! ```text
//! ImageGrid + Placement
//!      │
//!      ▼
//! Footprint (degree center/extents → radian bounds)
//!      │
//!      ├─► select_cells: mask every sphere cell, compress to the kept set
//!      │
//!      └─► sample_grid: one (colat, az) per image pixel, columns mirrored
//!               │
//!               ▼
//!      nearest_neighbor: selected cell ← closest image sample
//!               │
//!               ▼
//!      full-sphere map, zero outside the footprint
//! ```
//!
//! # Example
//!
//! ```
//! use sky_projector::{image_to_healpix, ImageGrid};
//!
//! let img = ImageGrid::new(vec![5.0; 64], 8, 8)?;
//! // 30°x30° patch centered on the equator at azimuth 0, nside 1.
//! let map = image_to_healpix(&img, 1, 90.0, 0.0, 30.0, 30.0, None)?;
//! assert_eq!(map.len(), 12);
//! # Ok::<(), sky_projector::ProjectionError>(())
//! ```
//!
//! Each call is stateless and synchronous; concurrent calls are safe.

pub mod error;
pub mod footprint;
pub mod image;
pub mod interpolation;
pub mod project;
pub mod sample;
pub mod select;

// Re-export commonly used items at the crate root
pub use error::{ProjectionError, Result};
pub use footprint::{AzimuthRange, Footprint};
pub use image::ImageGrid;
pub use interpolation::nearest_neighbor;
pub use project::{image_to_healpix, project_image, project_stack, Placement, Rotation};
pub use sample::sample_grid;
pub use select::{select_cells, CellSelection};
