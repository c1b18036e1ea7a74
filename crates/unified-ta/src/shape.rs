//! Input-shape contracts for indicator families.
//!
//! Every indicator unit declares exactly one [`ShapeContract`]. The contract
//! is checked eagerly, when the unit is constructed, so a caller learns about
//! a missing column before any numeric work happens.
//!
//! Validation is ordered: [`ShapeContract::RequiresOhlcv`] first performs the
//! full OHLC check and only then looks for `volume`, so a table missing both
//! `high` and `volume` reports `high`.
//!
//! # Example
//!
//! ```
//! use unified_ta::frame::Frame;
//! use unified_ta::shape::ShapeContract;
//! use unified_ta::Error;
//!
//! let frame = Frame::new(vec![
//!     ("open", vec![1.0]),
//!     ("high", vec![1.0]),
//!     ("low", vec![1.0]),
//!     ("close", vec![1.0]),
//! ])
//! .unwrap();
//!
//! assert!(ShapeContract::RequiresOhlc.validate(&frame, "close").is_ok());
//! assert_eq!(
//!     ShapeContract::RequiresOhlcv.validate(&frame, "close"),
//!     Err(Error::MissingColumns { columns: vec!["volume".into()] })
//! );
//! ```

use std::fmt;

use crate::columns::{OHLC, OHLCV};
use crate::error::{Error, Result};
use crate::frame::Frame;

/// The minimum input an indicator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeContract {
    /// One price column, chosen by the caller's column selector.
    SeriesOnly,
    /// The canonical `open`, `high`, `low`, `close` columns.
    RequiresOhlc,
    /// The OHLC columns plus `volume`.
    RequiresOhlcv,
}

impl ShapeContract {
    /// Checks `frame` against this contract.
    ///
    /// `column` is the caller's column selector; only [`Self::SeriesOnly`]
    /// consults it.
    ///
    /// # Errors
    ///
    /// - `SeriesOnly`: `Error::MissingColumn` if `column` is absent.
    /// - `RequiresOhlc`: `Error::MissingColumns` listing every absent OHLC column.
    /// - `RequiresOhlcv`: the OHLC error if any, else
    ///   `Error::MissingColumns(["volume"])` if volume is absent.
    pub fn validate(self, frame: &Frame, column: &str) -> Result<()> {
        match self {
            Self::SeriesOnly => {
                if frame.contains(column) {
                    Ok(())
                } else {
                    Err(Error::MissingColumn {
                        column: column.to_owned(),
                    })
                }
            }
            Self::RequiresOhlc => validate_ohlc(frame),
            Self::RequiresOhlcv => {
                validate_ohlc(frame)?;
                if frame.contains("volume") {
                    Ok(())
                } else {
                    Err(Error::MissingColumns {
                        columns: vec!["volume".to_owned()],
                    })
                }
            }
        }
    }

    /// Returns `true` if a bare price series satisfies this contract.
    #[must_use]
    pub const fn accepts_series(self) -> bool {
        matches!(self, Self::SeriesOnly)
    }

    /// Returns the canonical columns the contract names, empty for `SeriesOnly`.
    #[must_use]
    pub const fn required_columns(self) -> &'static [&'static str] {
        match self {
            Self::SeriesOnly => &[],
            Self::RequiresOhlc => &OHLC,
            Self::RequiresOhlcv => &OHLCV,
        }
    }
}

impl fmt::Display for ShapeContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeriesOnly => f.write_str("series"),
            Self::RequiresOhlc => f.write_str("OHLC"),
            Self::RequiresOhlcv => f.write_str("OHLCV"),
        }
    }
}

fn validate_ohlc(frame: &Frame) -> Result<()> {
    let missing: Vec<String> = OHLC
        .iter()
        .filter(|name| !frame.contains(name))
        .map(|name| (*name).to_owned())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingColumns { columns: missing })
    }
}
