//! Utility functions for unified-ta.
//!
//! # Floating-Point Comparison
//!
//! Exact equality is rarely appropriate for indicator output. These helpers
//! compare with a tolerance and treat two NaNs as equal, which is what tests
//! of warm-up periods need.
//!
//! # Example
//!
//! ```
//! use unified_ta::utils::{approx_eq, EPSILON};
//!
//! assert!(approx_eq(1.0 / 3.0, 0.333333333333333, EPSILON));
//! assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Approximate equality check; two NaNs compare equal.
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Counts the NaN values before the first non-NaN value.
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}

/// Divides, mapping a zero denominator to NaN.
///
/// Ratio formulas use this so a flat window yields "no signal" instead of an
/// infinity.
#[inline]
#[must_use]
pub fn safe_div<T: SeriesElement>(numerator: T, denominator: T) -> T {
    if denominator == T::zero() {
        T::nan()
    } else {
        numerator / denominator
    }
}
