//! TP (Typical Price) indicator.
//!
//! `TP = (high + low + close) / 3`. No parameters, no lookback.

use crate::error::Result;
use crate::frame::Frame;
use crate::indicator::{Indicator, IndicatorOutput};
use crate::params::{ParamSpec, Resolved};
use crate::shape::ShapeContract;

/// Computes the typical price of each bar.
#[must_use]
pub fn typical_price(high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    high.iter()
        .zip(low)
        .zip(close)
        .map(|((h, l), c)| (h + l + c) / 3.0)
        .collect()
}

/// The `TP` indicator unit.
#[derive(Debug, Clone)]
pub struct TypicalPrice {
    data: Frame,
}

impl Indicator for TypicalPrice {
    const NAME: &'static str = "TP";
    const SHAPE: ShapeContract = ShapeContract::RequiresOhlc;
    const PARAMS: &'static [ParamSpec] = &[];
    const SUMMARY: &'static str = "typical price, the mean of high, low and close";

    fn from_validated(data: Frame, _column: &str, _params: &Resolved) -> Result<Self> {
        Ok(Self { data })
    }

    fn compute(&self) -> Result<IndicatorOutput> {
        let values = typical_price(
            self.data.require("high")?,
            self.data.require("low")?,
            self.data.require("close")?,
        );
        Ok(IndicatorOutput::series("TP", self.data.shared_index(), values))
    }
}
