//! Rolling highest and lowest values.
//!
//! Both kernels keep a deque of candidate indices whose values are ordered
//! (decreasing for the maximum, increasing for the minimum). An incoming
//! value evicts every candidate it dominates, and the front of the deque is
//! the extremum of the current window, so each element is pushed and popped
//! at most once.
//!
//! # Window Semantics
//!
//! A position produces a value only when the full window of `period` values is
//! available and none of them is NaN. Input shorter than the window yields an
//! all-NaN output of the same length rather than an error.
//!
//! # Example
//!
//! ```
//! use unified_ta::kernels::rolling_extrema::{rolling_max, rolling_min};
//!
//! let high = [10.0_f64, 12.0, 11.0, 9.0, 13.0];
//! let low = [8.0_f64, 9.5, 7.0, 8.0, 10.0];
//!
//! let hh = rolling_max(&high, 3).unwrap();
//! assert!(hh[1].is_nan());
//! assert_eq!(&hh[2..], &[12.0, 12.0, 13.0]);
//!
//! let ll = rolling_min(&low, 3).unwrap();
//! assert_eq!(&ll[2..], &[7.0, 7.0, 7.0]);
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// A monotonic deque for tracking rolling extrema.
///
/// Besides the ordered index deque, the structure remembers the most recent
/// NaN position so callers can tell whether the current window is clean.
#[derive(Debug, Clone)]
pub struct MonotonicDeque<T> {
    deque: VecDeque<usize>,
    period: usize,
    last_nan: Option<usize>,
    _phantom: PhantomData<T>,
}

impl<T: SeriesElement> MonotonicDeque<T> {
    /// Creates an empty deque for windows of `period` values.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self::with_capacity(period, 0)
    }

    /// Creates an empty deque for windows of `period` values over a series of
    /// `len` values.
    ///
    /// The deque never holds more than `min(period, len)` indices, so that is
    /// all it reserves.
    #[must_use]
    pub fn with_capacity(period: usize, len: usize) -> Self {
        Self {
            deque: VecDeque::with_capacity(period.min(len)),
            period,
            last_nan: None,
            _phantom: PhantomData,
        }
    }

    /// Returns the window size.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Pushes `data[index]`, keeping the deque ordered for a maximum.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push_max(&mut self, index: usize, data: &[T]) {
        self.push_with(index, data, |incoming, back| incoming >= back);
    }

    /// Pushes `data[index]`, keeping the deque ordered for a minimum.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push_min(&mut self, index: usize, data: &[T]) {
        self.push_with(index, data, |incoming, back| incoming <= back);
    }

    #[inline]
    fn push_with(&mut self, index: usize, data: &[T], dominates: impl Fn(T, T) -> bool) {
        let value = data[index];

        if value.is_nan() {
            self.last_nan = Some(index);
        } else {
            while let Some(&back_idx) = self.deque.back() {
                if dominates(value, data[back_idx]) {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back(index);
        }

        self.remove_expired(index);
    }

    #[inline]
    fn remove_expired(&mut self, current_index: usize) {
        if current_index >= self.period {
            let window_start = current_index + 1 - self.period;
            while let Some(&front_idx) = self.deque.front() {
                if front_idx < window_start {
                    self.deque.pop_front();
                } else {
                    break;
                }
            }
        }
    }

    /// Returns `true` if a NaN was seen inside the window ending at `current_index`.
    #[inline]
    #[must_use]
    pub fn window_has_nan(&self, current_index: usize) -> bool {
        let window_start = (current_index + 1).saturating_sub(self.period);
        self.last_nan.is_some_and(|idx| idx >= window_start)
    }

    /// Returns the current extremum for the window ending at `current_index`.
    ///
    /// Returns `NaN` if the window holds a NaN or no values.
    #[inline]
    pub fn get_extremum(&self, current_index: usize, data: &[T]) -> T {
        if self.window_has_nan(current_index) {
            return T::nan();
        }
        self.deque.front().map_or_else(T::nan, |&idx| data[idx])
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

/// Highest value of each `period`-wide window.
///
/// The first `period - 1` values are NaN.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn rolling_max<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    check_period(period)?;

    let mut result = vec![T::nan(); data.len()];
    let mut deque: MonotonicDeque<T> = MonotonicDeque::with_capacity(period, data.len());

    for i in 0..data.len() {
        deque.push_max(i, data);
        if i + 1 >= period {
            result[i] = deque.get_extremum(i, data);
        }
    }

    Ok(result)
}

/// Lowest value of each `period`-wide window.
///
/// The first `period - 1` values are NaN.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn rolling_min<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    check_period(period)?;

    let mut result = vec![T::nan(); data.len()];
    let mut deque: MonotonicDeque<T> = MonotonicDeque::with_capacity(period, data.len());

    for i in 0..data.len() {
        deque.push_min(i, data);
        if i + 1 >= period {
            result[i] = deque.get_extremum(i, data);
        }
    }

    Ok(result)
}
