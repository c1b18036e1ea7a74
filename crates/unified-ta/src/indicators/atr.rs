//! Average True Range (ATR) indicator.
//!
//! A volatility measure: the simple moving average of the true range. It
//! feeds the momentum threshold of [`vpn`](super::vpn).
//!
//! # Formula
//!
//! ```text
//! TR[0] = High[0] - Low[0]
//! TR[i] = max(
//!     High[i] - Low[i],
//!     |High[i] - Close[i-1]|,
//!     |Low[i] - Close[i-1]|
//! )
//! ATR[i] = SMA(TR, period)[i]
//! ```
//!
//! The first bar has no previous close, so its true range is the bar range.
//!
//! # NaN Handling
//!
//! The maximum skips NaN terms: a missing previous close leaves the bar range.
//! A true range is NaN only when all three terms are NaN.
//!
//! # Lookback
//!
//! The first `period - 1` values are NaN.
//!
//! # Example
//!
//! ```
//! use unified_ta::indicators::atr::{average_true_range, true_range};
//!
//! let high = [48.70, 48.72, 48.90, 48.87, 48.82];
//! let low = [47.79, 48.14, 48.39, 48.37, 48.24];
//! let close = [48.16, 48.61, 48.75, 48.63, 48.74];
//!
//! let tr = true_range(&high, &low, &close);
//! assert!((tr[0] - 0.91).abs() < 1e-9);
//!
//! let atr = average_true_range(&high, &low, &close, 3).unwrap();
//! assert!(atr[1].is_nan());
//! assert!(!atr[2].is_nan());
//! ```

use crate::error::Result;
use crate::frame::Frame;
use crate::indicator::{Indicator, IndicatorOutput};
use crate::kernels::rolling_mean;
use crate::params::{ParamSpec, Params, Resolved};
use crate::shape::ShapeContract;

/// Returns the number of leading NaN values in the ATR output.
#[inline]
#[must_use]
pub const fn atr_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Computes the true range of each bar.
#[must_use]
pub fn true_range(high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    let n = high.len().min(low.len()).min(close.len());
    (0..n)
        .map(|i| {
            let range = high[i] - low[i];
            if i == 0 {
                return range;
            }
            let prev_close = close[i - 1];
            range
                .max((high[i] - prev_close).abs())
                .max((low[i] - prev_close).abs())
        })
        .collect()
}

/// Computes the simple-average ATR over `period` bars.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
pub fn average_true_range(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<f64>> {
    rolling_mean(&true_range(high, low, close), period)
}

/// Typed parameters for [`Atr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtrConfig {
    period: usize,
}

impl Default for AtrConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl AtrConfig {
    /// Sets the averaging window.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }
}

impl From<AtrConfig> for Params {
    fn from(config: AtrConfig) -> Self {
        Self::new().with("period", config.period)
    }
}

/// The `ATR` indicator unit.
#[derive(Debug, Clone)]
pub struct Atr {
    data: Frame,
    period: usize,
}

impl Indicator for Atr {
    const NAME: &'static str = "ATR";
    const SHAPE: ShapeContract = ShapeContract::RequiresOhlc;
    const PARAMS: &'static [ParamSpec] = &[ParamSpec::period("period", 14)];
    const SUMMARY: &'static str = "average true range, simple moving average of the true range";

    fn from_validated(data: Frame, _column: &str, params: &Resolved) -> Result<Self> {
        Ok(Self {
            data,
            period: params.period("period")?,
        })
    }

    fn compute(&self) -> Result<IndicatorOutput> {
        let values = average_true_range(
            self.data.require("high")?,
            self.data.require("low")?,
            self.data.require("close")?,
            self.period,
        )?;
        Ok(IndicatorOutput::series("ATR", self.data.shared_index(), values))
    }
}
