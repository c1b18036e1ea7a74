//! VPN (Volume Positive Negative) indicator.
//!
//! Compares the volume traded on bars with a meaningful up move against the
//! volume on bars with a meaningful down move, normalized by average volume.
//! The result oscillates roughly between -100 and 100.
//!
//! # Formula
//!
//! ```text
//! mf   = TP[i] - TP[i-1]
//! mc   = 0.1 * ATR(period)
//! up   = volume where mf >  mc, else 0
//! down = volume where mf < -mc, else 0
//! vp   = rolling sum of up over period
//! vn   = rolling sum of down over period
//! mav  = rolling mean volume over period, floored to 1 where <= 0
//! VPN    = EMA((vp - vn) / mav / period * 100, ema_period)
//! MA_VPN = SMA(VPN, mav_period)
//! ```
//!
//! Comparisons against NaN count as "no move"; a NaN volume stays NaN.
//!
//! # Default Parameters
//!
//! - period: 30
//! - `ema_period`: 3
//! - `mav_period`: 30
//! - adjust: true (adjusted EMA weights)

use crate::error::Result;
use crate::frame::Frame;
use crate::indicator::{Indicator, IndicatorOutput};
use crate::kernels::{ewm_mean, rolling_mean, rolling_sum};
use crate::params::{ParamSpec, Params, Resolved};
use crate::shape::ShapeContract;

use super::atr::average_true_range;
use super::typical_price::typical_price;

/// Output of [`vpn`].
#[derive(Debug, Clone, PartialEq)]
pub struct VpnOutput {
    /// The smoothed oscillator.
    pub vpn: Vec<f64>,
    /// Moving average of the oscillator.
    pub ma_vpn: Vec<f64>,
}

/// Inputs to [`vpn`], one slice per OHLCV column used.
#[derive(Debug, Clone, Copy)]
pub struct VpnInput<'a> {
    /// High prices.
    pub high: &'a [f64],
    /// Low prices.
    pub low: &'a [f64],
    /// Close prices.
    pub close: &'a [f64],
    /// Traded volume.
    pub volume: &'a [f64],
}

/// Computes VPN and its moving average.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if any period is 0.
pub fn vpn(input: VpnInput<'_>, config: VpnConfig) -> Result<VpnOutput> {
    let VpnInput {
        high,
        low,
        close,
        volume,
    } = input;
    let period = config.period;

    let tp = typical_price(high, low, close);
    let atr = average_true_range(high, low, close, period)?;

    let mut up = vec![f64::NAN; volume.len()];
    let mut down = vec![f64::NAN; volume.len()];
    for i in 0..volume.len() {
        let mf = if i == 0 { f64::NAN } else { tp[i] - tp[i - 1] };
        let mc = 0.1 * atr[i];
        up[i] = f64::from(u8::from(mf > mc)) * volume[i];
        down[i] = f64::from(u8::from(mf < -mc)) * volume[i];
    }

    let vp = rolling_sum(&up, period)?;
    let vn = rolling_sum(&down, period)?;
    let mav = rolling_mean(volume, period)?;

    #[allow(clippy::cast_precision_loss)]
    let scale = period as f64;
    let raw: Vec<f64> = (0..volume.len())
        .map(|i| {
            let mav = if mav[i] <= 0.0 { 1.0 } else { mav[i] };
            (vp[i] - vn[i]) / mav / scale * 100.0
        })
        .collect();

    let vpn = ewm_mean(&raw, config.ema_period, config.adjust)?;
    let ma_vpn = rolling_mean(&vpn, config.mav_period)?;

    Ok(VpnOutput { vpn, ma_vpn })
}

/// Typed parameters for [`Vpn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VpnConfig {
    period: usize,
    ema_period: usize,
    mav_period: usize,
    adjust: bool,
}

impl Default for VpnConfig {
    fn default() -> Self {
        Self {
            period: 30,
            ema_period: 3,
            mav_period: 30,
            adjust: true,
        }
    }
}

impl VpnConfig {
    /// Sets the volume comparison window.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the smoothing span of the VPN line.
    #[must_use]
    pub const fn ema_period(mut self, ema_period: usize) -> Self {
        self.ema_period = ema_period;
        self
    }

    /// Sets the window of the `MA_VPN` signal line.
    #[must_use]
    pub const fn mav_period(mut self, mav_period: usize) -> Self {
        self.mav_period = mav_period;
        self
    }

    /// Selects adjusted (`true`) or recursive (`false`) EMA weights.
    #[must_use]
    pub const fn adjust(mut self, adjust: bool) -> Self {
        self.adjust = adjust;
        self
    }
}

impl From<VpnConfig> for Params {
    fn from(config: VpnConfig) -> Self {
        Self::new()
            .with("period", config.period)
            .with("ema_period", config.ema_period)
            .with("mav_period", config.mav_period)
            .with("adjust", config.adjust)
    }
}

/// The `VPN` indicator unit.
#[derive(Debug, Clone)]
pub struct Vpn {
    data: Frame,
    config: VpnConfig,
}

impl Indicator for Vpn {
    const NAME: &'static str = "VPN";
    const SHAPE: ShapeContract = ShapeContract::RequiresOhlcv;
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::period("period", 30),
        ParamSpec::period("ema_period", 3),
        ParamSpec::period("mav_period", 30),
        ParamSpec::flag("adjust", true),
    ];
    const SUMMARY: &'static str = "volume positive/negative oscillator with moving average";

    fn from_validated(data: Frame, _column: &str, params: &Resolved) -> Result<Self> {
        let config = VpnConfig::default()
            .period(params.period("period")?)
            .ema_period(params.period("ema_period")?)
            .mav_period(params.period("mav_period")?)
            .adjust(params.flag("adjust")?);
        Ok(Self { data, config })
    }

    fn compute(&self) -> Result<IndicatorOutput> {
        let input = VpnInput {
            high: self.data.require("high")?,
            low: self.data.require("low")?,
            close: self.data.require("close")?,
            volume: self.data.require("volume")?,
        };
        let out = vpn(input, self.config)?;
        Ok(IndicatorOutput::frame(
            self.data.shared_index(),
            vec![("VPN", out.vpn), ("MA_VPN", out.ma_vpn)],
        ))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::utils::{approx_eq, count_nan_prefix, EPSILON};

    struct Bars {
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    }

    impl Bars {
        fn rising(n: usize) -> Self {
            let close: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
            Self {
                high: close.iter().map(|c| c + 0.5).collect(),
                low: close.iter().map(|c| c - 0.5).collect(),
                volume: vec![1000.0; n],
                close,
            }
        }

        fn input(&self) -> VpnInput<'_> {
            VpnInput {
                high: &self.high,
                low: &self.low,
                close: &self.close,
                volume: &self.volume,
            }
        }
    }

    #[test]
    fn test_vpn_steady_uptrend_saturates() {
        let bars = Bars::rising(12);
        let config = VpnConfig::default().period(3).ema_period(1).mav_period(2);
        let out = vpn(bars.input(), config).unwrap();
        // Every bar from index 2 on is an up move of 1.0 against a threshold
        // of 0.1 * ATR; once the window holds three of them vp = 3 * 1000,
        // vn = 0 and mav = 1000.
        assert_eq!(count_nan_prefix(&out.vpn), 2);
        for v in &out.vpn[4..] {
            assert!(approx_eq(*v, 100.0, EPSILON));
        }
        assert!(out.ma_vpn[2].is_nan());
        assert!(approx_eq(out.ma_vpn[5], 100.0, EPSILON));
    }

    #[test]
    fn test_vpn_first_window_excludes_missing_momentum() {
        // At i = 2 the window covers bars 0..=2. Bar 0 has no momentum and
        // bar 1 has no ATR yet; both count as no move, so only bar 2 counts.
        let bars = Bars::rising(5);
        let config = VpnConfig::default().period(3).ema_period(1).mav_period(1);
        let out = vpn(bars.input(), config).unwrap();
        let expected = 1000.0 / 1000.0 / 3.0 * 100.0;
        assert!(approx_eq(out.vpn[2], expected, EPSILON));
        assert!(approx_eq(out.vpn[3], 2.0 * expected, EPSILON));
    }

    #[test]
    fn test_vpn_zero_volume_floors_average() {
        let mut bars = Bars::rising(8);
        bars.volume = vec![0.0; 8];
        let config = VpnConfig::default().period(2).ema_period(2).mav_period(2);
        let out = vpn(bars.input(), config).unwrap();
        assert!(out.vpn[1..].iter().all(|v| approx_eq(*v, 0.0, EPSILON)));
    }

    #[test]
    fn test_vpn_nan_volume_propagates_to_window() {
        let mut bars = Bars::rising(8);
        bars.volume[4] = f64::NAN;
        let config = VpnConfig::default().period(2).ema_period(1).mav_period(1);
        let out = vpn(bars.input(), config).unwrap();
        assert!(out.vpn[4].is_nan() || approx_eq(out.vpn[4], out.vpn[3], EPSILON));
        assert!(out.vpn[7].is_finite());
    }

    #[test]
    fn test_adjust_flag_changes_smoothing() {
        let mut bars = Bars::rising(20);
        for (i, c) in bars.close.iter_mut().enumerate() {
            if i % 3 == 0 {
                *c -= 3.0;
            }
        }
        let adjusted = vpn(bars.input(), VpnConfig::default().period(4).ema_period(5)).unwrap();
        let recursive = vpn(bars.input(), VpnConfig::default().period(4).ema_period(5).adjust(false)).unwrap();
        assert_eq!(count_nan_prefix(&adjusted.vpn), count_nan_prefix(&recursive.vpn));
        assert!(adjusted
            .vpn
            .iter()
            .zip(&recursive.vpn)
            .any(|(a, r)| a.is_finite() && (a - r).abs() > 1e-9));
    }

    #[test]
    fn test_config_into_params() {
        let params: Params = VpnConfig::default().adjust(false).into();
        assert_eq!(params.get("adjust"), Some(false.into()));
        assert_eq!(params.get("period"), Some(30usize.into()));
    }
}
