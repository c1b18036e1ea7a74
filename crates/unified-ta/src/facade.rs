//! Unified entry point over a price table or a price series.
//!
//! A [`Ta`] session holds one data source for its whole lifetime and a
//! reference to a [`Registry`]. Every indicator is requested by name; the
//! session resolves it, checks that its shape contract can be satisfied by
//! the source kind, and runs it. Nothing is cached: each call recomputes.
//!
//! # Example
//!
//! ```
//! use unified_ta::facade::Ta;
//! use unified_ta::frame::{Frame, Series};
//! use unified_ta::params::Params;
//! use unified_ta::Error;
//!
//! let ohlc = Frame::new(vec![
//!     ("Open", vec![1.0, 2.0, 3.0]),
//!     ("High", vec![2.0, 3.0, 4.0]),
//!     ("Low", vec![0.5, 1.5, 2.5]),
//!     ("Close", vec![1.5, 2.5, 3.5]),
//! ])
//! .unwrap();
//!
//! let ta = Ta::from_frame(ohlc).unwrap();
//! let tp = ta.indicator("TP", &Params::new()).unwrap();
//! assert_eq!(tp.names(), vec!["TP"]);
//!
//! let series = Ta::from_series(Series::new("px", vec![1.0, 2.0, 3.0]));
//! assert!(matches!(
//!     series.indicator("VPN", &Params::new()),
//!     Err(Error::IncompatibleIndicator { .. })
//! ));
//! ```

use std::fmt;

use tracing::debug;

use crate::columns::standardize_ohlcv_columns;
use crate::error::{Error, Result};
use crate::frame::{Frame, Series};
use crate::indicator::{IndicatorOutput, DEFAULT_COLUMN};
use crate::params::Params;
use crate::registry::{IndicatorDef, IndicatorInfo, Registry};

/// The data a [`Ta`] session computes over.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A standardized OHLC(V) table.
    Table(Frame),
    /// A single price series.
    Series(Series),
}

impl Source {
    /// Returns the kind of this source.
    #[must_use]
    pub const fn kind(&self) -> SourceKind {
        match self {
            Self::Table(_) => SourceKind::Table,
            Self::Series(_) => SourceKind::Series,
        }
    }
}

/// Which kind of data a session holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// A multi-column table.
    Table,
    /// A single series.
    Series,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => f.write_str("table"),
            Self::Series => f.write_str("series"),
        }
    }
}

/// A technical-analysis session over one data source.
#[derive(Debug, Clone)]
pub struct Ta<'r> {
    source: Source,
    registry: &'r Registry,
}

impl Ta<'static> {
    /// Creates a session over exactly one of `ohlc` or `series`, backed by
    /// the global registry.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if neither or both sources are given, or
    /// if the table's column names cannot be standardized.
    pub fn new(ohlc: Option<Frame>, series: Option<Series>) -> Result<Self> {
        Self::with_registry(ohlc, series, Registry::global())
    }

    /// Creates a session over a price table.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the column names cannot be standardized.
    pub fn from_frame(ohlc: Frame) -> Result<Self> {
        Self::new(Some(ohlc), None)
    }

    /// Creates a session over a price series.
    #[must_use]
    pub fn from_series(series: Series) -> Self {
        Self {
            source: Source::Series(series),
            registry: Registry::global(),
        }
    }
}

impl<'r> Ta<'r> {
    /// Creates a session backed by a custom registry.
    ///
    /// # Errors
    ///
    /// Same as [`Ta::new`].
    pub fn with_registry(ohlc: Option<Frame>, series: Option<Series>, registry: &'r Registry) -> Result<Self> {
        let source = match (ohlc, series) {
            (Some(frame), None) => {
                let standardized = standardize_ohlcv_columns(&frame)
                    .map_err(|e| Error::invalid_input(format!("cannot standardize columns: {e}")))?;
                Source::Table(standardized)
            }
            (None, Some(series)) => Source::Series(series),
            (None, None) => return Err(Error::invalid_input("either an OHLC table or a price series is required")),
            (Some(_), Some(_)) => {
                return Err(Error::invalid_input(
                    "provide either an OHLC table or a price series, not both",
                ))
            }
        };
        Ok(Self { source, registry })
    }

    /// Returns the data source.
    #[must_use]
    pub const fn source(&self) -> &Source {
        &self.source
    }

    /// Returns the registry indicators are resolved against.
    #[must_use]
    pub const fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Computes `name` on the `close` column.
    ///
    /// # Errors
    ///
    /// See [`Ta::indicator_on`].
    pub fn indicator(&self, name: &str, params: &Params) -> Result<IndicatorOutput> {
        self.indicator_on(name, DEFAULT_COLUMN, params)
    }

    /// Computes `name` on the selected column.
    ///
    /// `column` only matters for series-only indicators; table indicators use
    /// the canonical OHLCV columns.
    ///
    /// # Errors
    ///
    /// - `Error::UnknownIndicator` if `name` is not registered.
    /// - `Error::IncompatibleIndicator` if the session holds a series and the
    ///   indicator needs a table. Checked before the indicator is built.
    /// - Any shape or parameter error raised while building the indicator.
    pub fn indicator_on(&self, name: &str, column: &str, params: &Params) -> Result<IndicatorOutput> {
        let def = self.resolve(name)?;
        debug!(indicator = def.name, source = %self.source.kind(), column, "dispatching indicator");

        match &self.source {
            Source::Table(frame) => def.run(frame, column, params),
            Source::Series(series) => {
                if !def.shape.accepts_series() {
                    return Err(Error::IncompatibleIndicator {
                        name: def.name.to_owned(),
                        shape: def.shape,
                    });
                }
                def.run(&Frame::from_series(series, column), column, params)
            }
        }
    }

    /// Returns the names computable on this session's source, sorted.
    #[must_use]
    pub fn available_indicators(&self) -> Vec<&'static str> {
        let series_only = matches!(self.source, Source::Series(_));
        self.registry
            .iter()
            .filter(|def| !series_only || def.shape.accepts_series())
            .map(|def| def.name)
            .collect()
    }

    /// Returns the description of a registered indicator.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownIndicator` if `name` is not registered.
    pub fn describe(&self, name: &str) -> Result<IndicatorInfo> {
        self.resolve(name).map(IndicatorDef::info)
    }

    fn resolve(&self, name: &str) -> Result<&'r IndicatorDef> {
        self.registry.get(name).ok_or_else(|| Error::UnknownIndicator {
            name: name.to_owned(),
        })
    }
}
