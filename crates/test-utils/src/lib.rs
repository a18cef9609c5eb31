//! Shared test utilities for the sky-projector workspace.
//!
//! Provides deterministic synthetic image generators and approximate
//! floating-point assertion macros used across the test suite.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod generators;

// Re-export commonly used items at the crate root
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of (colatitude, azimuth) pairs.
///
/// # Usage
///
/// ```
/// use test_utils::assert_angles_approx_eq;
///
/// assert_angles_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 0.001);
/// ```
#[macro_export]
macro_rules! assert_angles_approx_eq {
    (($colat1:expr, $az1:expr), ($colat2:expr, $az2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($colat1, $colat2, $epsilon);
        $crate::assert_approx_eq!($az1, $az2, $epsilon);
    }};
}
