//! unified-ta: named technical-analysis indicators behind one call surface.
//!
//! Indicators are grouped by the input they need (a single price series, an
//! OHLC table, or an OHLCV table), registered under a name, and reached
//! through a single [`Ta`](facade::Ta) session that validates input shape and
//! parameters before any numeric work happens.
//!
//! # Features
//!
//! - **Shape contracts**: every indicator declares the columns it needs;
//!   violations are reported eagerly and precisely
//! - **Registry**: a static declaration list, discovered once per process
//! - **pandas-compatible numerics**: rolling windows and exponentially
//!   weighted means match the usual dataframe conventions, including NaN
//!   propagation and warm-up periods
//! - **Direct use**: every indicator is also a plain struct and a plain
//!   slice function
//!
//! # Quick Start
//!
//! ```
//! use unified_ta::prelude::*;
//!
//! let close: Vec<f64> = (0..60).map(|i| 100.0 + (f64::from(i) * 0.2).sin()).collect();
//! let ta = Ta::from_series(Series::new("close", close));
//!
//! let kama = ta.indicator("KAMA", &KamaConfig::default().period(10).into()).unwrap();
//! assert_eq!(kama.len(), 60);
//!
//! // Table-only indicators are rejected on a series before any computation.
//! let err = ta.indicator("ATR", &Params::new()).unwrap_err();
//! assert!(matches!(err, Error::IncompatibleIndicator { .. }));
//! ```
//!
//! # Available Indicators
//!
//! | Name | Input | Output |
//! |------|-------|--------|
//! | `AMA` | OHLC | `AMA<period>` |
//! | `KAMA` | series | `KAMA` |
//! | `ER` | series | `ER` |
//! | `STOCH_MACD` | OHLC | `STMACD`, `STMACD_SIGNAL` |
//! | `MABW` | series | `MAB_UPPER`, `MAB_MIDDLE`, `MAB_LOWER`, `MAB_WIDTH`, `MAB_LLV` |
//! | `VPN` | OHLCV | `VPN`, `MA_VPN` |
//! | `ATR` | OHLC | `ATR` |
//! | `TP` | OHLC | `TP` |
//!
//! # Error Handling
//!
//! Construction and lookup errors are returned as [`Error`]; numeric
//! degeneracies (flat ranges, zero averages) never fail and show up as NaN:
//!
//! ```
//! use unified_ta::prelude::*;
//!
//! let ohlc = Frame::new(vec![
//!     ("open", vec![1.0, 2.0]),
//!     ("high", vec![2.0, 3.0]),
//!     ("low", vec![0.5, 1.5]),
//!     ("close", vec![1.5, 2.5]),
//! ])
//! .unwrap();
//! let ta = Ta::from_frame(ohlc).unwrap();
//!
//! assert_eq!(
//!     ta.indicator("VPN", &Params::new()).unwrap_err(),
//!     Error::MissingColumns { columns: vec!["volume".into()] }
//! );
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod columns;
pub mod error;
pub mod facade;
pub mod frame;
pub mod indicator;
pub mod indicators;
pub mod kernels;
pub mod params;
pub mod prelude;
pub mod registry;
pub mod shape;
pub mod traits;
pub mod utils;

pub use error::{Error, Result};
pub use facade::Ta;
