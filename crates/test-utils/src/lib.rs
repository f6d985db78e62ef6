//! Shared test utilities for the heatman workspace.
//!
//! This crate provides common testing infrastructure including:
//! - CSV table fixtures
//! - Synthetic table generators
//! - Temporary output paths
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, gradient_table_csv};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use generators::*;
pub use paths::*;

/// Assert that two numbers are within `epsilon` of each other.
///
/// Both sides are widened to `f64`, so integer and `f32` operands work too.
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(Hsb::from_value(0.0).hue, 2.0 / 3.0, 1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right, epsilon) = ($left as f64, $right as f64, $epsilon as f64);
        if (left - right).abs() > epsilon {
            panic!(
                "assertion failed: {} is not within {} of {} (diff {})",
                left,
                epsilon,
                right,
                (left - right).abs()
            );
        }
    }};
}

/// Assert that two RGBA colors differ by at most `tolerance` per channel.
///
/// Colors are anything indexable as `[u8; 4]`-like (`[r, g, b, a]`).
///
/// ```ignore
/// use test_utils::assert_rgba_near;
///
/// assert_rgba_near!([0, 254, 0, 255], [0, 255, 0, 255], 1);
/// ```
#[macro_export]
macro_rules! assert_rgba_near {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left: [u8; 4] = $left;
        let right: [u8; 4] = $right;
        let tolerance: i32 = $tolerance;
        for channel in 0..4 {
            let diff = (left[channel] as i32 - right[channel] as i32).abs();
            if diff > tolerance {
                panic!(
                    "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  channel {} differs by {} > {}",
                    left, right, channel, diff, tolerance
                );
            }
        }
    }};
}
