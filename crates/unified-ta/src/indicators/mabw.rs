//! MABW (Moving Average Bands and Width) indicator.
//!
//! Bands around a slow EMA whose half-width is the root-mean-square distance
//! between the slow and fast EMAs. The width line, in percent of the slow
//! EMA, contracts ahead of breakouts; its rolling minimum (`MAB_LLV`) marks
//! the squeeze.
//!
//! # Formula
//!
//! ```text
//! slow  = EMA(x, slow_period)
//! fast  = EMA(x, fast_period)
//! dev   = sqrt(SMA((slow - fast)^2, fast_period)) * multiplier
//! upper = slow + dev
//! lower = slow - dev
//! width = (upper - lower) / slow * 100     (slow == 0: NaN)
//! llv   = rolling min of width over slow_period
//! ```
//!
//! # Default Parameters
//!
//! - `fast_period`: 10
//! - `slow_period`: 50
//! - multiplier: 1.0

use crate::error::Result;
use crate::frame::Frame;
use crate::indicator::{Indicator, IndicatorOutput};
use crate::kernels::{ewm_mean, rolling_mean, rolling_min};
use crate::params::{ParamSpec, Params, Resolved};
use crate::shape::ShapeContract;
use crate::utils::safe_div;

/// Output of [`mabw`].
#[derive(Debug, Clone, PartialEq)]
pub struct MabwOutput {
    /// Slow EMA plus deviation.
    pub upper: Vec<f64>,
    /// Fast EMA.
    pub middle: Vec<f64>,
    /// Slow EMA minus deviation.
    pub lower: Vec<f64>,
    /// Band width in percent of the slow EMA.
    pub width: Vec<f64>,
    /// Rolling minimum of the width.
    pub llv: Vec<f64>,
}

/// Computes the moving average bands and their width.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if either period is 0.
pub fn mabw(data: &[f64], fast_period: usize, slow_period: usize, multiplier: f64) -> Result<MabwOutput> {
    let slow = ewm_mean(data, slow_period, true)?;
    let fast = ewm_mean(data, fast_period, true)?;

    let sq_dist: Vec<f64> = slow.iter().zip(&fast).map(|(s, f)| (s - f).powi(2)).collect();
    let dev: Vec<f64> = rolling_mean(&sq_dist, fast_period)?
        .into_iter()
        .map(|v| v.sqrt() * multiplier)
        .collect();

    let upper: Vec<f64> = slow.iter().zip(&dev).map(|(s, d)| s + d).collect();
    let lower: Vec<f64> = slow.iter().zip(&dev).map(|(s, d)| s - d).collect();
    let width: Vec<f64> = (0..data.len())
        .map(|i| safe_div(upper[i] - lower[i], slow[i]) * 100.0)
        .collect();
    let llv = rolling_min(&width, slow_period)?;

    Ok(MabwOutput {
        upper,
        middle: fast,
        lower,
        width,
        llv,
    })
}

/// Typed parameters for [`Mabw`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MabwConfig {
    fast_period: usize,
    slow_period: usize,
    multiplier: f64,
}

impl Default for MabwConfig {
    fn default() -> Self {
        Self {
            fast_period: 10,
            slow_period: 50,
            multiplier: 1.0,
        }
    }
}

impl MabwConfig {
    /// Sets the fast EMA span and deviation window.
    #[must_use]
    pub const fn fast_period(mut self, fast_period: usize) -> Self {
        self.fast_period = fast_period;
        self
    }

    /// Sets the slow EMA span and width minimum window.
    #[must_use]
    pub const fn slow_period(mut self, slow_period: usize) -> Self {
        self.slow_period = slow_period;
        self
    }

    /// Sets the band deviation multiplier.
    #[must_use]
    pub const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

impl From<MabwConfig> for Params {
    fn from(config: MabwConfig) -> Self {
        Self::new()
            .with("fast_period", config.fast_period)
            .with("slow_period", config.slow_period)
            .with("multiplier", config.multiplier)
    }
}

/// The `MABW` indicator unit.
#[derive(Debug, Clone)]
pub struct Mabw {
    data: Frame,
    column: String,
    config: MabwConfig,
}

impl Indicator for Mabw {
    const NAME: &'static str = "MABW";
    const SHAPE: ShapeContract = ShapeContract::SeriesOnly;
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::period("fast_period", 10),
        ParamSpec::period("slow_period", 50),
        ParamSpec::positive("multiplier", 1.0),
    ];
    const SUMMARY: &'static str = "moving average bands with width and width minimum";

    fn from_validated(data: Frame, column: &str, params: &Resolved) -> Result<Self> {
        let config = MabwConfig::default()
            .fast_period(params.period("fast_period")?)
            .slow_period(params.period("slow_period")?)
            .multiplier(params.positive("multiplier")?);
        Ok(Self {
            data,
            column: column.to_owned(),
            config,
        })
    }

    fn compute(&self) -> Result<IndicatorOutput> {
        let out = mabw(
            self.data.require(&self.column)?,
            self.config.fast_period,
            self.config.slow_period,
            self.config.multiplier,
        )?;
        Ok(IndicatorOutput::frame(
            self.data.shared_index(),
            vec![
                ("MAB_UPPER", out.upper),
                ("MAB_MIDDLE", out.middle),
                ("MAB_LOWER", out.lower),
                ("MAB_WIDTH", out.width),
                ("MAB_LLV", out.llv),
            ],
        ))
    }
}
