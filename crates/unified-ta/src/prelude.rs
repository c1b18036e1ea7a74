//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use unified_ta::prelude::*;
//!
//! let ta = Ta::from_series(Series::new("close", vec![1.0, 2.0, 3.0, 2.0, 3.0]));
//! let er = ta.indicator("ER", &ErConfig::default().period(2).into()).unwrap();
//! assert_eq!(er.column("ER").unwrap()[2], 1.0);
//! ```
//!
//! # Contents
//!
//! ## Error Handling
//! - [`Error`], [`Result`]
//!
//! ## Data
//! - [`Frame`], [`Series`], [`IndicatorOutput`]
//!
//! ## Entry Points
//! - [`Ta`]: the facade
//! - [`Registry`]: name lookup
//! - [`Indicator`]: direct use of a unit
//!
//! ## Parameters
//! - [`Params`] and every typed `*Config`

// Error types
pub use crate::error::{Error, Result};

// Data
pub use crate::frame::{Frame, Series};
pub use crate::indicator::{Indicator, IndicatorOutput};

// Entry points
pub use crate::facade::Ta;
pub use crate::registry::Registry;
pub use crate::shape::ShapeContract;

// Parameters
pub use crate::indicators::{AmaConfig, AtrConfig, ErConfig, KamaConfig, MabwConfig, StochMacdConfig, VpnConfig};
pub use crate::params::{ParamValue, Params};

// Traits
pub use crate::traits::SeriesElement;
