//! Rolling sums and means over a fixed window.
//!
//! [`RollingSum`] keeps a compensated (Kahan) running sum of the finite values
//! inside the window together with a count of NaN values, so each step costs
//! O(1) and a window containing NaN can be detected without rescanning.
//!
//! A position produces a value only once `period` observations are available
//! and none of them is NaN; shorter input yields an all-NaN output.
//!
//! # Example
//!
//! ```
//! use unified_ta::kernels::rolling_window::{rolling_mean, rolling_sum};
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let sums = rolling_sum(&data, 3).unwrap();
//! assert!(sums[1].is_nan());
//! assert!((sums[2] - 6.0).abs() < 1e-10);
//!
//! let means = rolling_mean(&data, 3).unwrap();
//! assert!((means[4] - 4.0).abs() < 1e-10);
//! ```

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Compensated running sum over a sliding window.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollingSum<T> {
    sum: T,
    compensation: T,
    nan_count: usize,
}

impl<T: SeriesElement> RollingSum<T> {
    /// Creates an empty running sum.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            compensation: T::zero(),
            nan_count: 0,
        }
    }

    /// Adds a value entering the window.
    #[inline]
    pub fn add(&mut self, value: T) {
        if value.is_nan() {
            self.nan_count += 1;
        } else {
            self.accumulate(value);
        }
    }

    /// Removes a value leaving the window.
    #[inline]
    pub fn remove(&mut self, value: T) {
        if value.is_nan() {
            self.nan_count = self.nan_count.saturating_sub(1);
        } else {
            self.accumulate(-value);
        }
    }

    #[inline]
    fn accumulate(&mut self, value: T) {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    /// Returns the current sum, or NaN if the window holds a NaN.
    #[inline]
    #[must_use]
    pub fn sum(&self) -> T {
        if self.nan_count > 0 {
            T::nan()
        } else {
            self.sum
        }
    }
}

fn check_period(period: usize) -> Result<()> {
    if period == 0 {
        return Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        });
    }
    Ok(())
}

/// Computes the rolling sum over `period` values.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn rolling_sum<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    check_period(period)?;

    let mut output = vec![T::nan(); data.len()];
    let mut window = RollingSum::new();

    for (i, &value) in data.iter().enumerate() {
        window.add(value);
        if i >= period {
            window.remove(data[i - period]);
        }
        if i + 1 >= period {
            output[i] = window.sum();
        }
    }

    Ok(output)
}

/// Computes the rolling arithmetic mean over `period` values.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn rolling_mean<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let n = T::from_usize(period)?;
    let mut output = rolling_sum(data, period)?;
    for value in &mut output {
        *value = *value / n;
    }
    Ok(output)
}
