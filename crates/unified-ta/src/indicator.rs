//! The indicator unit contract and its output type.
//!
//! An indicator unit is a plain struct implementing [`Indicator`]. The trait's
//! associated constants describe the unit to the registry (name, shape
//! contract, parameters); [`Indicator::new`] validates input and parameters
//! eagerly; [`Indicator::compute`] is a pure function of the validated state.
//!
//! Units are usable directly, without the facade:
//!
//! ```
//! use unified_ta::frame::Frame;
//! use unified_ta::indicator::Indicator;
//! use unified_ta::indicators::Kama;
//! use unified_ta::params::Params;
//!
//! let frame = Frame::new(vec![("close", (1..=40).map(f64::from).collect())]).unwrap();
//! let kama = Kama::new(&frame, "close", &Params::new().with("period", 5)).unwrap();
//! let output = kama.compute().unwrap();
//! assert_eq!(output.len(), 40);
//! ```

use std::sync::Arc;

use crate::error::Result;
use crate::frame::{Frame, Series, Timestamp};
use crate::params::{ParamSpec, Params, Resolved};
use crate::shape::ShapeContract;

/// Column selector used when the caller does not name one.
pub const DEFAULT_COLUMN: &str = "close";

/// The result of an indicator computation.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorOutput {
    /// A single named output sequence.
    Series(Series),
    /// A fixed-schema table of named output columns.
    Frame(Frame),
}

impl IndicatorOutput {
    /// Returns the time index shared with the input.
    #[must_use]
    pub fn index(&self) -> &[Timestamp] {
        match self {
            Self::Series(series) => series.index(),
            Self::Frame(frame) => frame.index(),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index().len()
    }

    /// Returns `true` if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index().is_empty()
    }

    /// Returns the output names: the series name, or the column names in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Series(series) => vec![series.name()],
            Self::Frame(frame) => frame.column_names().collect(),
        }
    }

    /// Returns the values of the named output.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        match self {
            Self::Series(series) if series.name() == name => Some(series.values()),
            Self::Series(_) => None,
            Self::Frame(frame) => frame.column(name),
        }
    }

    /// Returns the series if this is a single-series output.
    #[must_use]
    pub const fn as_series(&self) -> Option<&Series> {
        match self {
            Self::Series(series) => Some(series),
            Self::Frame(_) => None,
        }
    }

    /// Returns the frame if this is a multi-column output.
    #[must_use]
    pub const fn as_frame(&self) -> Option<&Frame> {
        match self {
            Self::Series(_) => None,
            Self::Frame(frame) => Some(frame),
        }
    }

    /// Converts into the series, if this is a single-series output.
    #[must_use]
    pub fn into_series(self) -> Option<Series> {
        match self {
            Self::Series(series) => Some(series),
            Self::Frame(_) => None,
        }
    }

    /// Converts into the frame, if this is a multi-column output.
    #[must_use]
    pub fn into_frame(self) -> Option<Frame> {
        match self {
            Self::Series(_) => None,
            Self::Frame(frame) => Some(frame),
        }
    }

    pub(crate) fn series(name: impl Into<String>, index: Arc<[Timestamp]>, values: Vec<f64>) -> Self {
        Self::Series(Series::from_parts(name, index, values))
    }

    pub(crate) fn frame(index: Arc<[Timestamp]>, columns: Vec<(&str, Vec<f64>)>) -> Self {
        Self::Frame(Frame::from_parts(index, columns))
    }
}

/// A technical indicator computation unit.
///
/// Implementors provide [`Indicator::from_validated`] and
/// [`Indicator::compute`]; construction goes through [`Indicator::new`],
/// which validates the shape contract and then the parameters.
pub trait Indicator: Sized {
    /// Registry key; unique across units.
    const NAME: &'static str;

    /// The input columns this unit requires.
    const SHAPE: ShapeContract;

    /// Declared parameters with their defaults.
    const PARAMS: &'static [ParamSpec];

    /// One-line description.
    const SUMMARY: &'static str;

    /// Builds the unit from data that already satisfies [`Self::SHAPE`] and
    /// parameters resolved against [`Self::PARAMS`].
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter cannot be read back from `params`.
    fn from_validated(data: Frame, column: &str, params: &Resolved) -> Result<Self>;

    /// Computes the indicator over the full history.
    ///
    /// Numeric degeneracies (flat ranges, zero means) never fail; they show up
    /// as NaN or clamped values.
    ///
    /// # Errors
    ///
    /// Only kernel-level parameter errors, which construction already rules out.
    fn compute(&self) -> Result<IndicatorOutput>;

    /// Validates `data` and `params`, then builds the unit.
    ///
    /// # Errors
    ///
    /// Returns the shape-contract error first (`MissingColumn` /
    /// `MissingColumns`), then any parameter error (`UnknownParameter` /
    /// `InvalidParameter`).
    fn new(data: &Frame, column: &str, params: &Params) -> Result<Self> {
        Self::SHAPE.validate(data, column)?;
        let resolved = params.resolve(Self::NAME, Self::PARAMS)?;
        tracing::trace!(indicator = Self::NAME, column, params = ?resolved, "constructing indicator");
        Self::from_validated(data.clone(), column, &resolved)
    }

    /// Builds the unit over a bare price series.
    ///
    /// The series becomes a one-column frame named [`DEFAULT_COLUMN`].
    ///
    /// # Errors
    ///
    /// Same as [`Indicator::new`]; non-series contracts fail with
    /// `MissingColumns`.
    fn from_series(series: &Series, params: &Params) -> Result<Self> {
        Self::new(&Frame::from_series(series, DEFAULT_COLUMN), DEFAULT_COLUMN, params)
    }
}
