//! Time-indexed series and column tables.
//!
//! [`Series`] is one named sequence; [`Frame`] is an ordered set of named
//! columns sharing a single time index. Both store their buffers behind `Arc`,
//! so cloning a frame (which every indicator unit does at construction) copies
//! pointers, not data.
//!
//! The time index is carried through every computation untouched: indicator
//! output shares the exact index of its input.
//!
//! # Example
//!
//! ```
//! use unified_ta::frame::{Frame, Series};
//!
//! let frame = Frame::new(vec![
//!     ("close", vec![10.0, 10.5, 11.0]),
//!     ("volume", vec![1_000.0, 1_200.0, 900.0]),
//! ])
//! .unwrap();
//!
//! assert_eq!(frame.len(), 3);
//! assert_eq!(frame.index(), &[0, 1, 2]);
//! assert_eq!(frame.column("close"), Some(&[10.0, 10.5, 11.0][..]));
//!
//! let close: Series = frame.series("close").unwrap();
//! assert_eq!(close.name(), "close");
//! ```

use std::sync::Arc;

use crate::error::{Error, Result};

/// A time key: epoch timestamp or bar sequence number.
pub type Timestamp = i64;

#[allow(clippy::cast_possible_wrap)]
fn default_index(len: usize) -> Arc<[Timestamp]> {
    (0..len).map(|i| i as Timestamp).collect()
}

/// A single named numeric sequence indexed by time.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    index: Arc<[Timestamp]>,
    values: Arc<[f64]>,
}

impl Series {
    /// Creates a series with the default `0..n` index.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        let index = default_index(values.len());
        Self {
            name: name.into(),
            index,
            values: values.into(),
        }
    }

    /// Creates a series over an explicit time index.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if `values` and `index` differ in length.
    pub fn with_index(
        name: impl Into<String>,
        index: Vec<Timestamp>,
        values: Vec<f64>,
    ) -> Result<Self> {
        let name = name.into();
        if index.len() != values.len() {
            return Err(Error::LengthMismatch {
                column: name,
                expected: index.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            name,
            index: index.into(),
            values: values.into(),
        })
    }

    pub(crate) fn from_parts(name: impl Into<String>, index: Arc<[Timestamp]>, values: Vec<f64>) -> Self {
        debug_assert_eq!(index.len(), values.len());
        Self {
            name: name.into(),
            index,
            values: values.into(),
        }
    }

    /// Returns the series name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the time index.
    #[must_use]
    pub fn index(&self) -> &[Timestamp] {
        &self.index
    }

    /// Returns the values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn shared_index(&self) -> Arc<[Timestamp]> {
        Arc::clone(&self.index)
    }
}

/// A named column of a [`Frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Arc<[f64]>,
}

impl Column {
    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// An ordered table of named `f64` columns sharing one time index.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    index: Arc<[Timestamp]>,
    columns: Vec<Column>,
}

impl Frame {
    /// Creates a frame with the default `0..n` index.
    ///
    /// The index length is taken from the first column.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if columns differ in length and
    /// `Error::InvalidInput` if a column name repeats.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = (S, Vec<f64>)>) -> Result<Self> {
        let columns: Vec<(String, Vec<f64>)> =
            columns.into_iter().map(|(name, values)| (name.into(), values)).collect();
        let len = columns.first().map_or(0, |(_, values)| values.len());
        Self::build(default_index(len), columns)
    }

    /// Creates a frame over an explicit time index.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if any column differs from the index in
    /// length and `Error::InvalidInput` if a column name repeats.
    pub fn with_index<S: Into<String>>(
        index: Vec<Timestamp>,
        columns: impl IntoIterator<Item = (S, Vec<f64>)>,
    ) -> Result<Self> {
        let columns = columns.into_iter().map(|(name, values)| (name.into(), values)).collect();
        Self::build(index.into(), columns)
    }

    fn build(index: Arc<[Timestamp]>, columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let mut built: Vec<Column> = Vec::with_capacity(columns.len());
        for (name, values) in columns {
            if values.len() != index.len() {
                return Err(Error::LengthMismatch {
                    column: name,
                    expected: index.len(),
                    actual: values.len(),
                });
            }
            if built.iter().any(|c| c.name == name) {
                return Err(Error::invalid_input(format!("duplicate column '{name}'")));
            }
            built.push(Column {
                name,
                values: values.into(),
            });
        }
        Ok(Self {
            index,
            columns: built,
        })
    }

    /// Wraps a series as a one-column frame whose column is named `column`.
    #[must_use]
    pub fn from_series(series: &Series, column: &str) -> Self {
        Self {
            index: series.shared_index(),
            columns: vec![Column {
                name: column.to_owned(),
                values: Arc::clone(&series.values),
            }],
        }
    }

    /// Assembles indicator output columns over an existing index.
    pub(crate) fn from_parts(index: Arc<[Timestamp]>, columns: Vec<(&str, Vec<f64>)>) -> Self {
        let columns = columns
            .into_iter()
            .map(|(name, values)| {
                debug_assert_eq!(values.len(), index.len());
                Column {
                    name: name.to_owned(),
                    values: values.into(),
                }
            })
            .collect();
        Self { index, columns }
    }

    /// Returns a frame with the same data and the given column names.
    pub(crate) fn with_column_names(&self, names: Vec<String>) -> Self {
        debug_assert_eq!(names.len(), self.columns.len());
        let columns = self
            .columns
            .iter()
            .zip(names)
            .map(|(column, name)| Column {
                name,
                values: Arc::clone(&column.values),
            })
            .collect();
        Self {
            index: Arc::clone(&self.index),
            columns,
        }
    }

    /// Returns the time index.
    #[must_use]
    pub fn index(&self) -> &[Timestamp] {
        &self.index
    }

    pub(crate) fn shared_index(&self) -> Arc<[Timestamp]> {
        Arc::clone(&self.index)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the columns in order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// Returns `true` if a column with this exact name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Returns the values of a column.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.iter().find(|c| c.name == name).map(Column::values)
    }

    /// Returns the values of a column or `Error::MissingColumn`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingColumn` if no column has this name.
    pub fn require(&self, name: &str) -> Result<&[f64]> {
        self.column(name).ok_or_else(|| Error::MissingColumn {
            column: name.to_owned(),
        })
    }

    /// Returns a column as a [`Series`] sharing this frame's index.
    #[must_use]
    pub fn series(&self, name: &str) -> Option<Series> {
        self.columns.iter().find(|c| c.name == name).map(|c| Series {
            name: c.name.clone(),
            index: Arc::clone(&self.index),
            values: Arc::clone(&c.values),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    #[test]
    fn test_series_default_index() {
        let s = Series::new("close", vec![1.0, 2.0, 3.0]);
        assert_eq!(s.index(), &[0, 1, 2]);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_series_with_index_length_mismatch() {
        let err = Series::with_index("close", vec![1, 2], vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch {
                column: "close".into(),
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_frame_rejects_ragged_columns() {
        let err = Frame::new(vec![("a", vec![1.0, 2.0]), ("b", vec![1.0])]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { .. }));
    }

    #[test]
    fn test_frame_rejects_duplicate_names() {
        let err = Frame::new(vec![("a", vec![1.0]), ("a", vec![2.0])]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_frame_with_index() {
        let frame = Frame::with_index(vec![100, 200], vec![("close", vec![1.0, 2.0])]).unwrap();
        assert_eq!(frame.index(), &[100, 200]);
        let close = frame.series("close").unwrap();
        assert_eq!(close.index(), &[100, 200]);
    }

    #[test]
    fn test_from_series_names_column() {
        let s = Series::with_index("px", vec![5, 6], vec![1.0, 2.0]).unwrap();
        let frame = Frame::from_series(&s, "open");
        assert!(frame.contains("open"));
        assert!(!frame.contains("close"));
        assert_eq!(frame.index(), &[5, 6]);
    }

    #[test]
    fn test_require_missing_column() {
        let frame = Frame::new(vec![("close", vec![1.0])]).unwrap();
        assert_eq!(
            frame.require("high").unwrap_err(),
            Error::MissingColumn {
                column: "high".into()
            }
        );
    }

    #[test]
    fn test_empty_frame() {
        let frame = Frame::new(Vec::<(String, Vec<f64>)>::new()).unwrap();
        assert!(frame.is_empty());
        assert_eq!(frame.columns().len(), 0);
    }
}
