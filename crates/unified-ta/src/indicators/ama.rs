//! AMA (high-low range adaptive moving average) indicator.
//!
//! A recursive filter whose smoothing constant tracks where the close sits
//! inside the recent high-low range: closes pinned to either edge of the
//! range smooth fast, closes in the middle smooth slowly.
//!
//! # Formula
//!
//! ```text
//! hh  = highest high over period
//! ll  = lowest low over period
//! m   = |(close - ll) - (hh - close)| / (hh - ll)      (flat range: NaN)
//! cst = (m * (fast_sc - slow_sc) + slow_sc)^2
//!
//! ama[0] = close[0]
//! ama[i] = close[i-1] + cst[i] * (close[i] - close[i-1])     1 <= i < period
//! ama[i] = ama[i-1]                                         cst[i] is NaN
//! ama[i] = base + cst[i] * (close[i] - base)                otherwise
//! ```
//!
//! where `base` is `ama[i-1]`, or `close[i-1]` while the filter has not
//! produced a value yet. At `i = period - 1` the warm-up rule yields the seed.
//!
//! # Default Parameters
//!
//! - period: 10
//! - `fast_period`: 2
//! - `slow_period`: 30
//!
//! # Output
//!
//! A single series named `AMA<period>`, e.g. `AMA10`.

use crate::error::Result;
use crate::frame::Frame;
use crate::indicator::{Indicator, IndicatorOutput};
use crate::kernels::{rolling_max, rolling_min};
use crate::params::{ParamSpec, Params, Resolved};
use crate::shape::ShapeContract;
use crate::traits::SeriesElement;
use crate::utils::safe_div;

/// Computes AMA from high, low and close.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
///
/// # Example
///
/// ```
/// use unified_ta::indicators::ama::ama;
///
/// // A flat market never divides by zero; it just produces no signal.
/// let flat = [10.0, 10.0, 10.0];
/// let out = ama(&flat, &flat, &flat, 2, 2, 30).unwrap();
/// assert_eq!(out[0], 10.0);
/// assert!(out[1].is_nan() && out[2].is_nan());
/// ```
pub fn ama(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
    fast_period: usize,
    slow_period: usize,
) -> Result<Vec<f64>> {
    let fast_sc = f64::span_alpha(fast_period)?;
    let slow_sc = f64::span_alpha(slow_period)?;
    let hh = rolling_max(high, period)?;
    let ll = rolling_min(low, period)?;

    let cst: Vec<f64> = close
        .iter()
        .zip(hh.iter().zip(&ll))
        .map(|(&c, (&h, &l))| {
            let m = safe_div(((c - l) - (h - c)).abs(), h - l);
            (m * (fast_sc - slow_sc) + slow_sc).powi(2)
        })
        .collect();

    let mut out = vec![f64::NAN; close.len()];
    let Some(&first) = close.first() else {
        return Ok(out);
    };
    out[0] = first;

    for i in 1..close.len() {
        out[i] = if i < period {
            close[i - 1] + cst[i] * (close[i] - close[i - 1])
        } else if cst[i].is_nan() {
            out[i - 1]
        } else {
            let base = if out[i - 1].is_nan() { close[i - 1] } else { out[i - 1] };
            base + cst[i] * (close[i] - base)
        };
    }

    Ok(out)
}

/// Typed parameters for [`Ama`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmaConfig {
    period: usize,
    fast_period: usize,
    slow_period: usize,
}

impl Default for AmaConfig {
    fn default() -> Self {
        Self {
            period: 10,
            fast_period: 2,
            slow_period: 30,
        }
    }
}

impl AmaConfig {
    /// Sets the high-low lookback window.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the fast smoothing span.
    #[must_use]
    pub const fn fast_period(mut self, fast_period: usize) -> Self {
        self.fast_period = fast_period;
        self
    }

    /// Sets the slow smoothing span.
    #[must_use]
    pub const fn slow_period(mut self, slow_period: usize) -> Self {
        self.slow_period = slow_period;
        self
    }
}

impl From<AmaConfig> for Params {
    fn from(config: AmaConfig) -> Self {
        Self::new()
            .with("period", config.period)
            .with("fast_period", config.fast_period)
            .with("slow_period", config.slow_period)
    }
}

/// The `AMA` indicator unit.
#[derive(Debug, Clone)]
pub struct Ama {
    data: Frame,
    period: usize,
    fast_period: usize,
    slow_period: usize,
}

impl Indicator for Ama {
    const NAME: &'static str = "AMA";
    const SHAPE: ShapeContract = ShapeContract::RequiresOhlc;
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::period("period", 10),
        ParamSpec::period("fast_period", 2),
        ParamSpec::period("slow_period", 30),
    ];
    const SUMMARY: &'static str = "adaptive moving average driven by the position of close in the high-low range";

    fn from_validated(data: Frame, _column: &str, params: &Resolved) -> Result<Self> {
        Ok(Self {
            data,
            period: params.period("period")?,
            fast_period: params.period("fast_period")?,
            slow_period: params.period("slow_period")?,
        })
    }

    fn compute(&self) -> Result<IndicatorOutput> {
        let values = ama(
            self.data.require("high")?,
            self.data.require("low")?,
            self.data.require("close")?,
            self.period,
            self.fast_period,
            self.slow_period,
        )?;
        Ok(IndicatorOutput::series(
            format!("AMA{}", self.period),
            self.data.shared_index(),
            values,
        ))
    }
}
