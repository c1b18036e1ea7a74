//! Windowed and recursive kernels shared by the indicator units.
//!
//! # Kernels
//!
//! - [`rolling_extrema`]: monotonic deque for O(n) rolling max/min
//! - [`rolling_window`]: compensated running sums for rolling sum/mean
//! - [`ewm`]: span-parameterized exponentially weighted mean
//!
//! All kernels return output of the same length as their input. Positions
//! without a complete, NaN-free window are NaN.

pub mod ewm;
pub mod rolling_extrema;
pub mod rolling_window;

pub use ewm::ewm_mean;
pub use rolling_extrema::{rolling_max, rolling_min, MonotonicDeque};
pub use rolling_window::{rolling_mean, rolling_sum, RollingSum};
