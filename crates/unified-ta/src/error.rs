//! Error types for unified-ta.
//!
//! Construction-time and lookup-time failures are reported through [`Error`].
//! Numeric degeneracies inside an indicator (flat ranges, zero means) are
//! never errors; they surface as NaN or clamped values in the output.

use thiserror::Error;

use crate::shape::ShapeContract;

/// The main error type for unified-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The facade (or a frame) was given an unusable source.
    ///
    /// Returned when neither or both of a table and a series are supplied,
    /// when column standardization fails, or when a table fails OHLCV sanity
    /// checks.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of what was wrong with the input.
        reason: String,
    },

    /// A series-only indicator could not find its source column.
    #[error("column '{column}' not found")]
    MissingColumn {
        /// The column that was requested.
        column: String,
    },

    /// One or more columns required by a shape contract are absent.
    ///
    /// Every missing column is listed, in canonical OHLCV order.
    #[error("missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        /// The absent canonical column names.
        columns: Vec<String>,
    },

    /// No indicator with this name is registered.
    #[error("indicator '{name}' not found")]
    UnknownIndicator {
        /// The requested indicator name.
        name: String,
    },

    /// The indicator needs table columns but the facade only holds a series.
    #[error("indicator '{name}' requires {shape} data but series data was provided")]
    IncompatibleIndicator {
        /// The requested indicator name.
        name: String,
        /// The shape contract the indicator declares.
        shape: ShapeContract,
    },

    /// A parameter was supplied that the indicator does not declare.
    #[error("indicator '{indicator}' has no parameter '{name}'")]
    UnknownParameter {
        /// The indicator being configured.
        indicator: &'static str,
        /// The undeclared parameter name.
        name: String,
    },

    /// A parameter value has the wrong kind or is out of range.
    #[error("invalid parameter '{name}' for '{indicator}': {reason}")]
    InvalidParameter {
        /// The indicator being configured.
        indicator: &'static str,
        /// The offending parameter name.
        name: String,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// A column length does not match the index length.
    #[error("column '{column}' has {actual} values, index has {expected}")]
    LengthMismatch {
        /// The offending column.
        column: String,
        /// The index length.
        expected: usize,
        /// The column length.
        actual: usize,
    },

    /// Two source columns standardize to the same canonical name.
    #[error("columns {} all map to '{canonical}'", .sources.join(", "))]
    AmbiguousColumn {
        /// The canonical OHLCV name.
        canonical: &'static str,
        /// The original column names competing for it.
        sources: Vec<String>,
    },

    /// The period parameter is invalid.
    ///
    /// Kernels return this when called with a zero window. Indicator units
    /// reject such periods earlier, as [`Error::InvalidParameter`].
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// Failed to convert a numeric value to the target type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using the unified-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_lists_all() {
        let err = Error::MissingColumns {
            columns: vec!["open".into(), "low".into()],
        };
        assert_eq!(err.to_string(), "missing required columns: open, low");
    }

    #[test]
    fn test_incompatible_indicator_message() {
        let err = Error::IncompatibleIndicator {
            name: "VPN".into(),
            shape: ShapeContract::RequiresOhlcv,
        };
        assert_eq!(
            err.to_string(),
            "indicator 'VPN' requires OHLCV data but series data was provided"
        );
    }

    #[test]
    fn test_unknown_indicator_message() {
        let err = Error::UnknownIndicator {
            name: "NOPE".into(),
        };
        assert_eq!(err.to_string(), "indicator 'NOPE' not found");
    }

    #[test]
    fn test_ambiguous_column_message() {
        let err = Error::AmbiguousColumn {
            canonical: "close",
            sources: vec!["Close".into(), "c".into()],
        };
        assert_eq!(err.to_string(), "columns Close, c all map to 'close'");
    }

    #[test]
    fn test_invalid_period_error() {
        let err = Error::InvalidPeriod {
            period: 0,
            reason: "period must be at least 1",
        };
        assert_eq!(err.to_string(), "invalid period 0: period must be at least 1");
    }

    #[test]
    fn test_error_equality_and_clone() {
        let err = Error::MissingColumn {
            column: "close".into(),
        };
        assert_eq!(err.clone(), err);
        assert_ne!(
            err,
            Error::MissingColumn {
                column: "open".into()
            }
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_std_error<E: std::error::Error>(_: E) {}
        accepts_std_error(Error::invalid_input("nothing supplied"));
    }
}
