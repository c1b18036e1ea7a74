//! Numeric element trait shared by the kernels.
//!
//! The kernels in [`crate::kernels`] are generic over [`SeriesElement`] so they
//! work with both `f32` and `f64`. Indicator units and the facade operate on
//! `f64` columns.
//!
//! # Example
//!
//! ```
//! use unified_ta::traits::SeriesElement;
//!
//! fn mean<T: SeriesElement>(data: &[T]) -> unified_ta::Result<T> {
//!     let n = T::from_usize(data.len())?;
//!     Ok(data.iter().fold(T::zero(), |acc, &x| acc + x) / n)
//! }
//!
//! let m = mean(&[1.0_f64, 2.0, 3.0]).unwrap();
//! assert!((m - 2.0).abs() < 1e-12);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// Extends `num_traits::Float` with the conversions indicator code needs when
/// turning window lengths and constants into the element type.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Smoothing factor `2 / (span + 1)` used by span-parameterized averages.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if `span + 1` cannot be represented.
    #[inline]
    fn span_alpha(span: usize) -> Result<Self> {
        let two = Self::one() + Self::one();
        Ok(two / (Self::from_usize(span)? + Self::one()))
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}
