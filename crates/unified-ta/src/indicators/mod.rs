//! Concrete indicator units.
//!
//! Each unit lives in its own module and exposes three layers:
//!
//! - a slice-level function (`kama`, `ama`, `vpn`, ...) usable on raw
//!   `&[f64]` data;
//! - a typed configuration struct with builder setters, convertible into
//!   [`Params`](crate::params::Params);
//! - a unit struct implementing [`Indicator`](crate::indicator::Indicator),
//!   which is what the registry dispatches to.
//!
//! # Indicator Families
//!
//! ## Series only
//!
//! - [`Kama`] - Kaufman adaptive moving average (`KAMA`)
//! - [`EfficiencyRatio`] - Kaufman efficiency ratio (`ER`)
//! - [`Mabw`] - moving average bands and width (`MABW`)
//!
//! ## OHLC
//!
//! - [`Ama`] - high-low range adaptive moving average (`AMA`)
//! - [`StochMacd`] - stochastic MACD oscillator (`STOCH_MACD`)
//! - [`Atr`] - average true range (`ATR`)
//! - [`TypicalPrice`] - typical price (`TP`)
//!
//! ## OHLCV
//!
//! - [`Vpn`] - volume positive/negative oscillator (`VPN`)
//!
//! # NaN Handling
//!
//! Outputs always have the input's length. Warm-up positions are NaN, and
//! ratios over a flat window are NaN rather than an error.

pub mod ama;
pub mod atr;
pub mod efficiency_ratio;
pub mod kama;
pub mod mabw;
pub mod stoch_macd;
pub mod typical_price;
pub mod vpn;

pub use ama::{Ama, AmaConfig};
pub use atr::{Atr, AtrConfig};
pub use efficiency_ratio::{EfficiencyRatio, ErConfig};
pub use kama::{Kama, KamaConfig};
pub use mabw::{Mabw, MabwConfig};
pub use stoch_macd::{StochMacd, StochMacdConfig};
pub use typical_price::TypicalPrice;
pub use vpn::{Vpn, VpnConfig};

use crate::registry::{Declaration, IndicatorDef};

/// Every built-in unit, in declaration order.
///
/// [`Registry::global`](crate::registry::Registry::global) is built from this
/// list.
pub static BUILTIN: &[Declaration] = &[
    IndicatorDef::of::<Ama>,
    IndicatorDef::of::<Kama>,
    IndicatorDef::of::<EfficiencyRatio>,
    IndicatorDef::of::<StochMacd>,
    IndicatorDef::of::<Mabw>,
    IndicatorDef::of::<Vpn>,
    IndicatorDef::of::<Atr>,
    IndicatorDef::of::<TypicalPrice>,
];
