//! ER (Kaufman Efficiency Ratio) indicator.
//!
//! The efficiency ratio compares the net price change over a window with the
//! total path length travelled inside it. A straight trend scores 1, pure noise
//! tends to 0.
//!
//! # Formula
//!
//! ```text
//! change     = |x[i] - x[i - period]|
//! volatility = Σ |x[j] - x[j - 1]|   for j in (i - period, i]
//! ER         = change / volatility
//! ```
//!
//! A window with no movement at all has zero volatility; the ratio is NaN there.
//! Rounding in the running sum can push a perfect trend a hair above 1, so the
//! ratio is capped at 1.
//!
//! # Default Parameters
//!
//! - period: 10
//!
//! # Lookback
//!
//! The first `period` values are NaN.

use crate::error::Result;
use crate::frame::Frame;
use crate::indicator::{Indicator, IndicatorOutput};
use crate::kernels::rolling_sum;
use crate::params::{ParamSpec, Params, Resolved};
use crate::shape::ShapeContract;
use crate::utils::safe_div;

/// Returns the number of leading NaN values in the ER output.
#[inline]
#[must_use]
pub const fn er_lookback(period: usize) -> usize {
    period
}

/// Computes the efficiency ratio of `data` over `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
///
/// # Example
///
/// ```
/// use unified_ta::indicators::efficiency_ratio::efficiency_ratio;
///
/// let er = efficiency_ratio(&[1.0, 2.0, 3.0, 2.0, 3.0], 2).unwrap();
/// assert!(er[1].is_nan());
/// assert_eq!(er[2], 1.0);
/// assert_eq!(er[3], 0.0);
/// ```
pub fn efficiency_ratio(data: &[f64], period: usize) -> Result<Vec<f64>> {
    let steps: Vec<f64> = std::iter::once(f64::NAN)
        .chain(data.windows(2).map(|w| (w[1] - w[0]).abs()))
        .take(data.len())
        .collect();
    let volatility = rolling_sum(&steps, period)?;

    Ok(data
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            if i < period {
                f64::NAN
            } else {
                let er = safe_div((x - data[i - period]).abs(), volatility[i]);
                if er > 1.0 {
                    1.0
                } else {
                    er
                }
            }
        })
        .collect())
}

/// Typed parameters for [`EfficiencyRatio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErConfig {
    period: usize,
}

impl Default for ErConfig {
    fn default() -> Self {
        Self { period: 10 }
    }
}

impl ErConfig {
    /// Sets the lookback window.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }
}

impl From<ErConfig> for Params {
    fn from(config: ErConfig) -> Self {
        Self::new().with("period", config.period)
    }
}

/// The `ER` indicator unit.
#[derive(Debug, Clone)]
pub struct EfficiencyRatio {
    data: Frame,
    column: String,
    period: usize,
}

impl Indicator for EfficiencyRatio {
    const NAME: &'static str = "ER";
    const SHAPE: ShapeContract = ShapeContract::SeriesOnly;
    const PARAMS: &'static [ParamSpec] = &[ParamSpec::period("period", 10)];
    const SUMMARY: &'static str = "Kaufman efficiency ratio: net change over total movement";

    fn from_validated(data: Frame, column: &str, params: &Resolved) -> Result<Self> {
        Ok(Self {
            data,
            column: column.to_owned(),
            period: params.period("period")?,
        })
    }

    fn compute(&self) -> Result<IndicatorOutput> {
        let values = efficiency_ratio(self.data.require(&self.column)?, self.period)?;
        Ok(IndicatorOutput::series("ER", self.data.shared_index(), values))
    }
}
