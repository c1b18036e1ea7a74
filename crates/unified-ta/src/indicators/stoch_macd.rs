//! Stochastic MACD oscillator.
//!
//! MACD computed on stochastic-normalized moving averages: both EMAs are
//! expressed as a position inside the recent high-low range before being
//! differenced, which makes the oscillator comparable across price levels.
//!
//! # Formula
//!
//! ```text
//! hh, ll          = highest high, lowest low over period
//! stoch_fast      = (EMA(close, fast_period) - ll) / (hh - ll)
//! stoch_slow      = (EMA(close, slow_period) - ll) / (hh - ll)
//! STMACD          = (stoch_fast - stoch_slow) * 100
//! STMACD_SIGNAL   = EMA(STMACD, signal)
//! ```
//!
//! All EMAs are adjusted exponentially weighted means. A flat range yields NaN.
//!
//! # Default Parameters
//!
//! - period: 45
//! - `fast_period`: 12
//! - `slow_period`: 26
//! - signal: 9

use crate::error::Result;
use crate::frame::Frame;
use crate::indicator::{Indicator, IndicatorOutput};
use crate::kernels::{ewm_mean, rolling_max, rolling_min};
use crate::params::{ParamSpec, Params, Resolved};
use crate::shape::ShapeContract;
use crate::utils::safe_div;

/// Output of [`stoch_macd`].
#[derive(Debug, Clone, PartialEq)]
pub struct StochMacdOutput {
    /// The oscillator line.
    pub stmacd: Vec<f64>,
    /// EMA of the oscillator line.
    pub signal: Vec<f64>,
}

/// Computes the stochastic MACD and its signal line.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if any period is 0.
pub fn stoch_macd(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
    fast_period: usize,
    slow_period: usize,
    signal: usize,
) -> Result<StochMacdOutput> {
    let hh = rolling_max(high, period)?;
    let ll = rolling_min(low, period)?;
    let ema_fast = ewm_mean(close, fast_period, true)?;
    let ema_slow = ewm_mean(close, slow_period, true)?;

    let stmacd: Vec<f64> = (0..close.len())
        .map(|i| {
            let range = hh[i] - ll[i];
            let stoch_fast = safe_div(ema_fast[i] - ll[i], range);
            let stoch_slow = safe_div(ema_slow[i] - ll[i], range);
            (stoch_fast - stoch_slow) * 100.0
        })
        .collect();
    let signal = ewm_mean(&stmacd, signal, true)?;

    Ok(StochMacdOutput { stmacd, signal })
}

/// Typed parameters for [`StochMacd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StochMacdConfig {
    period: usize,
    fast_period: usize,
    slow_period: usize,
    signal: usize,
}

impl Default for StochMacdConfig {
    fn default() -> Self {
        Self {
            period: 45,
            fast_period: 12,
            slow_period: 26,
            signal: 9,
        }
    }
}

impl StochMacdConfig {
    /// Sets the high-low lookback window.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the fast EMA span.
    #[must_use]
    pub const fn fast_period(mut self, fast_period: usize) -> Self {
        self.fast_period = fast_period;
        self
    }

    /// Sets the slow EMA span.
    #[must_use]
    pub const fn slow_period(mut self, slow_period: usize) -> Self {
        self.slow_period = slow_period;
        self
    }

    /// Sets the signal EMA span.
    #[must_use]
    pub const fn signal(mut self, signal: usize) -> Self {
        self.signal = signal;
        self
    }
}

impl From<StochMacdConfig> for Params {
    fn from(config: StochMacdConfig) -> Self {
        Self::new()
            .with("period", config.period)
            .with("fast_period", config.fast_period)
            .with("slow_period", config.slow_period)
            .with("signal", config.signal)
    }
}

/// The `STOCH_MACD` indicator unit.
#[derive(Debug, Clone)]
pub struct StochMacd {
    data: Frame,
    config: StochMacdConfig,
}

impl Indicator for StochMacd {
    const NAME: &'static str = "STOCH_MACD";
    const SHAPE: ShapeContract = ShapeContract::RequiresOhlc;
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::period("period", 45),
        ParamSpec::period("fast_period", 12),
        ParamSpec::period("slow_period", 26),
        ParamSpec::period("signal", 9),
    ];
    const SUMMARY: &'static str = "MACD of stochastic-normalized EMAs with a signal line";

    fn from_validated(data: Frame, _column: &str, params: &Resolved) -> Result<Self> {
        let config = StochMacdConfig::default()
            .period(params.period("period")?)
            .fast_period(params.period("fast_period")?)
            .slow_period(params.period("slow_period")?)
            .signal(params.period("signal")?);
        Ok(Self { data, config })
    }

    fn compute(&self) -> Result<IndicatorOutput> {
        let StochMacdConfig {
            period,
            fast_period,
            slow_period,
            signal,
        } = self.config;
        let out = stoch_macd(
            self.data.require("high")?,
            self.data.require("low")?,
            self.data.require("close")?,
            period,
            fast_period,
            slow_period,
            signal,
        )?;
        Ok(IndicatorOutput::frame(
            self.data.shared_index(),
            vec![("STMACD", out.stmacd), ("STMACD_SIGNAL", out.signal)],
        ))
    }
}
