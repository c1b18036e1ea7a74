//! KAMA (Kaufman Adaptive Moving Average) indicator.
//!
//! KAMA is an adaptive moving average that adjusts its smoothing based on
//! market efficiency. It responds quickly during trending markets and slowly
//! during sideways markets.
//!
//! # Formula
//!
//! 1. Efficiency Ratio (ER) over `er_period`, see
//!    [`efficiency_ratio`](super::efficiency_ratio::efficiency_ratio)
//! 2. Smoothing Constant (SC) = \[ER * (`fast_sc` - `slow_sc`) + `slow_sc`\]^2
//!    where `fast_sc` = `2/(ema_fast+1)`, `slow_sc` = `2/(ema_slow+1)`
//! 3. Seed = simple moving average over `period`
//! 4. KAMA\[i\] = KAMA\[i-1\] + SC\[i\] * (Price\[i\] - KAMA\[i-1\]) when both
//!    KAMA\[i-1\] and SC\[i\] are finite; otherwise KAMA\[i\] = Seed\[i\]
//!
//! The recursion is a strict left-to-right scan. A gap in the input falls
//! back to the simple average and picks the recursion up again from there.
//!
//! # Default Parameters
//!
//! - `er_period`: 10
//! - `ema_fast`: 2
//! - `ema_slow`: 30
//! - period: 20 (seed average)
//!
//! # Lookback
//!
//! The first `period - 1` values are NaN.

use crate::error::Result;
use crate::frame::Frame;
use crate::indicator::{Indicator, IndicatorOutput};
use crate::kernels::rolling_mean;
use crate::params::{ParamSpec, Params, Resolved};
use crate::shape::ShapeContract;
use crate::traits::SeriesElement;

use super::efficiency_ratio::efficiency_ratio;

/// Returns the number of leading NaN values in the KAMA output.
#[inline]
#[must_use]
pub const fn kama_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Computes KAMA over `data`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `er_period` or `period` is 0.
pub fn kama(
    data: &[f64],
    er_period: usize,
    ema_fast: usize,
    ema_slow: usize,
    period: usize,
) -> Result<Vec<f64>> {
    let fast_sc = f64::span_alpha(ema_fast)?;
    let slow_sc = f64::span_alpha(ema_slow)?;
    let er = efficiency_ratio(data, er_period)?;
    let mut out = rolling_mean(data, period)?;

    for i in 1..data.len() {
        let prev = out[i - 1];
        let sc = (er[i] * (fast_sc - slow_sc) + slow_sc).powi(2);
        if prev.is_finite() && sc.is_finite() {
            out[i] = prev + sc * (data[i] - prev);
        }
    }

    Ok(out)
}

/// Typed parameters for [`Kama`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KamaConfig {
    er_period: usize,
    ema_fast: usize,
    ema_slow: usize,
    period: usize,
}

impl Default for KamaConfig {
    fn default() -> Self {
        Self {
            er_period: 10,
            ema_fast: 2,
            ema_slow: 30,
            period: 20,
        }
    }
}

impl KamaConfig {
    /// Sets the efficiency-ratio window.
    #[must_use]
    pub const fn er_period(mut self, er_period: usize) -> Self {
        self.er_period = er_period;
        self
    }

    /// Sets the fast smoothing span.
    #[must_use]
    pub const fn ema_fast(mut self, ema_fast: usize) -> Self {
        self.ema_fast = ema_fast;
        self
    }

    /// Sets the slow smoothing span.
    #[must_use]
    pub const fn ema_slow(mut self, ema_slow: usize) -> Self {
        self.ema_slow = ema_slow;
        self
    }

    /// Sets the seed average window.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }
}

impl From<KamaConfig> for Params {
    fn from(config: KamaConfig) -> Self {
        Self::new()
            .with("er_period", config.er_period)
            .with("ema_fast", config.ema_fast)
            .with("ema_slow", config.ema_slow)
            .with("period", config.period)
    }
}

/// The `KAMA` indicator unit.
#[derive(Debug, Clone)]
pub struct Kama {
    data: Frame,
    column: String,
    er_period: usize,
    ema_fast: usize,
    ema_slow: usize,
    period: usize,
}

impl Indicator for Kama {
    const NAME: &'static str = "KAMA";
    const SHAPE: ShapeContract = ShapeContract::SeriesOnly;
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::period("er_period", 10),
        ParamSpec::period("ema_fast", 2),
        ParamSpec::period("ema_slow", 30),
        ParamSpec::period("period", 20),
    ];
    const SUMMARY: &'static str = "Kaufman adaptive moving average seeded by a simple average";

    fn from_validated(data: Frame, column: &str, params: &Resolved) -> Result<Self> {
        Ok(Self {
            data,
            column: column.to_owned(),
            er_period: params.period("er_period")?,
            ema_fast: params.period("ema_fast")?,
            ema_slow: params.period("ema_slow")?,
            period: params.period("period")?,
        })
    }

    fn compute(&self) -> Result<IndicatorOutput> {
        let values = kama(
            self.data.require(&self.column)?,
            self.er_period,
            self.ema_fast,
            self.ema_slow,
            self.period,
        )?;
        Ok(IndicatorOutput::series("KAMA", self.data.shared_index(), values))
    }
}
